use crate::pane::PaneRole;

#[derive(Debug, thiserror::Error)]
pub enum DrawerError {
    #[error("drawer {0} pane was not supplied, build the drawer with both a content and a menu pane")]
    MissingPane(PaneRole),
    #[error("invalid menu width {0}, expected a finite value greater than zero")]
    InvalidMenuWidth(f32),
}
