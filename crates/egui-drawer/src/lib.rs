mod animation;
mod controller;
mod errors;
mod gesture;
mod handle;
mod layout;
mod options;
mod pane;
mod view;

pub use animation::OffsetAnimation;
pub use controller::{DrawerBuilder, DrawerController};
pub use errors::DrawerError;
pub use gesture::{DrawerState, GestureEvent, PanPhase, Recognizer, RecognizerKind};
pub use handle::{DrawerCommand, DrawerHandle};
pub use layout::Surface;
pub use options::{DrawerOptions, Easing, ShadowStyle};
pub use pane::{shared, DrawerPane, PaneRole, SharedPane};
pub use view::{DrawerView, DrawerViewState};
