use egui_drawer::DrawerError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Drawer(#[from] DrawerError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}
