use crate::consts::CONFIG_ENV;
use crate::errors::AppError;
use egui_drawer::DrawerOptions;
use std::env;
use std::fs;
use std::path::Path;
use tracing::info;

/// Drawer options from the file named by `SIDEMENU_CONFIG`, or defaults when
/// the variable is unset.
pub fn load_options() -> Result<DrawerOptions, AppError> {
    match env::var_os(CONFIG_ENV) {
        Some(path) => read_options(Path::new(&path)),
        None => Ok(DrawerOptions::default()),
    }
}

pub fn read_options(path: &Path) -> Result<DrawerOptions, AppError> {
    let data = fs::read_to_string(path)?;
    let options = serde_json::from_str(&data)?;
    info!("loaded drawer options from {}", path.display());
    Ok(options)
}
