use std::path::PathBuf;

use roimark_core::selector::{RoiSelector, SelectorConfig};

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub file_path: Option<PathBuf>,

    /// Selector for the loaded image; rebuilt whenever a new image loads.
    pub selector: Option<RoiSelector>,

    /// Thresholds applied to the selector (importable/exportable as TOML).
    pub config: SelectorConfig,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}

/// Viewport display state.
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Decoded source image, kept for cropping on submit.
    pub source: Option<image::DynamicImage>,
    /// Native pixel dimensions of the source.
    pub natural_size: Option<[u32; 2]>,
    /// Scale the fit applied last frame (1.0 = native size).
    pub display_scale: f32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            texture: None,
            source: None,
            natural_size: None,
            display_scale: 1.0,
        }
    }
}
