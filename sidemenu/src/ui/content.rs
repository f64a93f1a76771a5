use crate::ui::Page;
use egui::{Align, Button, Layout, Rect, RichText, Ui};
use egui_drawer::{DrawerHandle, DrawerPane};
use egui_phosphor::regular::LIST;
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;

const ICON_SIZE: f32 = 20.0;

pub struct ContentPane {
    drawer: DrawerHandle,
    page: Rc<Cell<Page>>,
    bounds: Rect,
}

impl ContentPane {
    pub fn new(drawer: DrawerHandle, page: Rc<Cell<Page>>) -> Self {
        Self {
            drawer,
            page,
            bounds: Rect::ZERO,
        }
    }

    fn top_bar(&mut self, ui: &mut Ui) {
        let page = self.page.get();
        ui.horizontal(|ui| {
            ui.heading(format!("{} {}", page.icon(), page.title()));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let menu_btn = Button::new(RichText::new(LIST).size(ICON_SIZE)).frame(false);
                if ui.add(menu_btn).on_hover_text("Menu").clicked() {
                    self.drawer.toggle(true);
                }
            });
        });
    }
}

impl DrawerPane for ContentPane {
    fn ui(&mut self, ui: &mut Ui) {
        egui::Frame::central_panel(ui.style()).show(ui, |ui| {
            self.top_bar(ui);
            ui.separator();

            ui.label(format!("Nothing in {} yet.", self.page.get().title()));
            ui.add_space(8.0);
            ui.weak("Drag from the right edge or use the menu button to open the menu.");
            ui.weak(format!(
                "Content surface: {:.0} x {:.0}",
                self.bounds.width(),
                self.bounds.height()
            ));
        });
    }

    fn layout(&mut self, bounds: Rect) {
        debug!("content pane resized to {:?}", bounds.size());
        self.bounds = bounds;
    }
}
