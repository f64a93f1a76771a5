mod content;
mod menu;

pub use content::ContentPane;
pub use menu::MenuPane;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Inbox,
    Starred,
    Archive,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Inbox, Page::Starred, Page::Archive];

    pub fn title(self) -> &'static str {
        match self {
            Page::Inbox => "Inbox",
            Page::Starred => "Starred",
            Page::Archive => "Archive",
        }
    }

    pub fn icon(self) -> &'static str {
        use egui_phosphor::regular::{ARCHIVE, STAR, TRAY};
        match self {
            Page::Inbox => TRAY,
            Page::Starred => STAR,
            Page::Archive => ARCHIVE,
        }
    }
}
