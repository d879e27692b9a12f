use std::path::PathBuf;

use roimark_core::geometry::NativeSize;
use roimark_core::selector::RoiSelector;

use crate::convert::to_color_image;
use crate::panels;
use crate::state::{UIState, ViewportState};

#[derive(Default)]
pub struct RoimarkApp {
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub show_about: bool,
}

impl RoimarkApp {
    /// Decode an image file and point the viewport and selector at it.
    pub fn open_image(&mut self, ctx: &egui::Context, path: PathBuf) {
        match image::open(&path) {
            Ok(img) => {
                let size = [img.width(), img.height()];
                let texture = ctx.load_texture(
                    "viewport",
                    to_color_image(&img),
                    egui::TextureOptions::LINEAR,
                );
                self.viewport.texture = Some(texture);
                self.viewport.source = Some(img);
                self.viewport.natural_size = Some(size);
                self.ui_state.selector = Some(RoiSelector::with_config(
                    NativeSize {
                        width: size[0],
                        height: size[1],
                    },
                    self.ui_state.config.clone(),
                ));
                self.ui_state
                    .add_log(format!("Opened: {} ({}x{})", path.display(), size[0], size[1]));
                self.ui_state.file_path = Some(path);
            }
            Err(e) => {
                tracing::warn!("failed to open {}: {e}", path.display());
                self.ui_state.add_log(format!("ERROR: {e}"));
            }
        }
    }
}

impl eframe::App for RoimarkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::actions::show(ctx, self);
        panels::viewport::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About Roimark")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Roimark");
                        ui.label("Region-of-interest selection for images");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
