use crate::config::load_options;
use crate::consts::PKG_NAME;
use crate::errors::AppError;
use crate::ui::{ContentPane, MenuPane, Page};
use eframe::{egui, NativeOptions};
use egui_drawer::{shared, DrawerBuilder, DrawerController, DrawerOptions, DrawerView};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{error, info};

pub struct SideMenu {
    pub drawer: DrawerController,
    pub settings: Rc<RefCell<DrawerOptions>>,
}

impl SideMenu {
    pub fn new(options: DrawerOptions) -> Result<Self, AppError> {
        let builder = DrawerBuilder::new();
        let handle = builder.handle();
        let page = Rc::new(Cell::new(Page::default()));
        let settings = Rc::new(RefCell::new(options.clone()));

        let content = shared(ContentPane::new(handle.clone(), page.clone()));
        let menu = shared(MenuPane::new(handle, page, settings.clone()));
        let drawer = builder
            .content(content)
            .menu(menu)
            .options(options)
            .build()?;
        info!("drawer ready, menu width {}", drawer.menu_width());

        Ok(Self { drawer, settings })
    }

    pub fn start(options: NativeOptions) -> eframe::Result<()> {
        eframe::run_native(
            "SideMenu",
            options,
            Box::new(|cc| {
                set_font(&cc.egui_ctx);
                let drawer_options = load_options()?;
                Ok(Box::new(SideMenu::new(drawer_options)?))
            }),
        )
    }

    /// Push edits made in the menu pane into the drawer.
    fn sync_settings(&mut self) {
        let settings = self.settings.borrow().clone();
        if &settings == self.drawer.options() {
            return;
        }
        if let Err(err) = self.drawer.set_options(settings) {
            error!("rejected drawer options: {err}");
            *self.settings.borrow_mut() = self.drawer.options().clone();
        }
    }
}

impl eframe::App for SideMenu {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let size = ui.available_size();
                let view = DrawerView::new(ui, &mut self.drawer)
                    .id_salt(ui, PKG_NAME)
                    .set_size(size);
                ui.add(view);
            });
        self.sync_settings();
    }
}

fn set_font(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);
}
