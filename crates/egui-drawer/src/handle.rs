use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerCommand {
    Show { animated: bool },
    Hide { animated: bool },
    Toggle { animated: bool },
}

/// Cloneable remote control for a drawer.
///
/// Hand it to whatever needs to open or close the menu, e.g. a menu button in
/// the content pane. Commands are queued and applied when the drawer next
/// draws, so a pane may use it while the drawer is rendering that pane.
#[derive(Debug, Clone)]
pub struct DrawerHandle {
    sender: Sender<DrawerCommand>,
    is_open: Arc<AtomicBool>,
}

impl DrawerHandle {
    pub(crate) fn new(sender: Sender<DrawerCommand>, is_open: Arc<AtomicBool>) -> Self {
        Self { sender, is_open }
    }

    pub(crate) fn state(&self) -> Arc<AtomicBool> {
        self.is_open.clone()
    }

    pub fn show(&self, animated: bool) {
        self.send(DrawerCommand::Show { animated });
    }

    pub fn hide(&self, animated: bool) {
        self.send(DrawerCommand::Hide { animated });
    }

    pub fn toggle(&self, animated: bool) {
        self.send(DrawerCommand::Toggle { animated });
    }

    /// Open state as of the drawer's last transition. Queued commands are not
    /// reflected until the drawer applies them.
    pub fn is_open(&self) -> bool {
        self.is_open.load(Ordering::Relaxed)
    }

    fn send(&self, command: DrawerCommand) {
        if let Err(err) = self.sender.send(command) {
            warn!("drawer is gone, dropping {:?}", err.0);
        }
    }
}
