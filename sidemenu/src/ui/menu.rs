use crate::consts::REPOSITORY_URL;
use crate::ui::Page;
use egui::{Button, Checkbox, CollapsingHeader, ComboBox, DragValue, Slider, Ui};
use egui_drawer::{DrawerHandle, DrawerOptions, DrawerPane, Easing, ShadowStyle};
use egui_phosphor::regular::{SLIDERS_HORIZONTAL, X};
use egui_theme_switch::global_theme_switch;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const BTN_WIDTH: f32 = 200.0;

/// Navigation plus live editing of the drawer's own options. Edits land in
/// `settings`, which the app pushes into the drawer after each frame.
pub struct MenuPane {
    drawer: DrawerHandle,
    page: Rc<Cell<Page>>,
    settings: Rc<RefCell<DrawerOptions>>,
}

impl MenuPane {
    pub fn new(
        drawer: DrawerHandle,
        page: Rc<Cell<Page>>,
        settings: Rc<RefCell<DrawerOptions>>,
    ) -> Self {
        Self {
            drawer,
            page,
            settings,
        }
    }

    fn navigation(&mut self, ui: &mut Ui) {
        for page in Page::ALL {
            let selected = self.page.get() == page;
            let label = format!("{} {}", page.icon(), page.title());
            if ui.selectable_label(selected, label).clicked() {
                self.page.set(page);
                self.drawer.hide(true);
            }
        }
    }

    fn drawer_settings(&mut self, ui: &mut Ui) {
        let mut settings = self.settings.borrow_mut();
        CollapsingHeader::new(format!("{SLIDERS_HORIZONTAL} Drawer"))
            .default_open(false)
            .show(ui, |ui| {
                ui.add(Slider::new(&mut settings.menu_width, 160.0..=400.0).text("Width"));
                ui.add(
                    Slider::new(&mut settings.animation_duration, 0.0..=1.0)
                        .text("Duration")
                        .suffix(" s"),
                );
                ui.add(Slider::new(&mut settings.edge_width, 4.0..=60.0).text("Edge"));
                ComboBox::from_label("Easing")
                    .selected_text(settings.easing.label())
                    .show_ui(ui, |ui| {
                        for easing in Easing::ALL {
                            ui.selectable_value(&mut settings.easing, easing, easing.label());
                        }
                    });
                ui.add(Checkbox::new(
                    &mut settings.ignore_gestures,
                    "Ignore gestures",
                ));
            });
        CollapsingHeader::new("Shadow")
            .default_open(false)
            .show(ui, |ui| shadow_settings(ui, &mut settings.shadow));
    }
}

impl DrawerPane for MenuPane {
    fn ui(&mut self, ui: &mut Ui) {
        egui::Frame::side_top_panel(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Menu");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(Button::new(X).frame(false)).clicked() {
                        self.drawer.hide(true);
                    }
                });
            });
            ui.separator();
            self.navigation(ui);
            ui.separator();
            self.drawer_settings(ui);
            ui.separator();
            ui.horizontal(|ui| {
                global_theme_switch(ui);
                ui.hyperlink_to("Source", REPOSITORY_URL);
            });
            let reset_btn = Button::new("Reset").min_size((BTN_WIDTH, 0.).into());
            if ui.add(reset_btn).clicked() {
                *self.settings.borrow_mut() = DrawerOptions::default();
            }
        });
    }
}

fn shadow_settings(ui: &mut Ui, shadow: &mut ShadowStyle) {
    ui.add(Slider::new(&mut shadow.radius, 0.0..=20.0).text("Radius"));
    ui.add(Slider::new(&mut shadow.opacity, 0.0..=1.0).text("Opacity"));
    ui.horizontal(|ui| {
        ui.label("Offset");
        ui.add(DragValue::new(&mut shadow.offset.x).range(-20.0..=20.0));
        ui.add(DragValue::new(&mut shadow.offset.y).range(-20.0..=20.0));
    });
    ui.horizontal(|ui| {
        ui.label("Color");
        ui.color_edit_button_srgba(&mut shadow.color);
    });
}
