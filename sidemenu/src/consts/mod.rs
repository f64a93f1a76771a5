pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const REPOSITORY_URL: &str = env!("CARGO_PKG_REPOSITORY");

/// Environment variable naming a JSON file with drawer options.
pub const CONFIG_ENV: &str = "SIDEMENU_CONFIG";
