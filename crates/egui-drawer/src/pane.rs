use egui::{Rect, Ui};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// UI subtree hosted by one of the drawer's surfaces.
///
/// Panes are shared with the host through [`SharedPane`], so the host can keep
/// its own handle to the pane it handed to the drawer.
pub trait DrawerPane {
    /// Render the pane into `ui`, whose max rect is the pane's surface.
    fn ui(&mut self, ui: &mut Ui);

    /// Called whenever the surface hosting this pane changes size. `bounds` is
    /// local to the surface, so its origin is always zero.
    fn layout(&mut self, _bounds: Rect) {}
}

pub type SharedPane = Rc<RefCell<dyn DrawerPane>>;

/// Wrap a pane so it can be shared between the host and the drawer.
pub fn shared<P: DrawerPane + 'static>(pane: P) -> SharedPane {
    Rc::new(RefCell::new(pane))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneRole {
    Content,
    Menu,
}

impl fmt::Display for PaneRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaneRole::Content => write!(f, "content"),
            PaneRole::Menu => write!(f, "menu"),
        }
    }
}

impl<F> DrawerPane for F
where
    F: FnMut(&mut Ui),
{
    fn ui(&mut self, ui: &mut Ui) {
        self(ui)
    }
}
