use roimark_core::crop::crop_image;
use roimark_core::roi::RoiRect;

use crate::app::RoimarkApp;

pub fn show(ctx: &egui::Context, app: &mut RoimarkApp) {
    egui::SidePanel::right("actions")
        .resizable(false)
        .default_width(230.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Region");
            ui.add_space(4.0);

            let selection = app
                .ui_state
                .selector
                .as_ref()
                .and_then(|s| s.selection())
                .cloned();

            output_fields(ui, selection.as_ref());

            ui.add_space(6.0);
            match selection.as_ref() {
                Some(r) => ui.small(format!(
                    "Selected: x={}, y={}, w={}, h={} (pixels)",
                    r.x, r.y, r.width, r.height
                )),
                None => ui.small("Drag on the image to select a region."),
            };

            ui.add_space(8.0);
            let enabled = selection.is_some();
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(enabled, egui::Button::new("Save Crop..."))
                    .clicked()
                {
                    submit(app);
                }
                if ui
                    .add_enabled(enabled, egui::Button::new("Clear"))
                    .clicked()
                {
                    if let Some(selector) = app.ui_state.selector.as_mut() {
                        selector.clear();
                    }
                }
            });
        });
}

/// The four output fields, empty while no selection exists.
fn output_fields(ui: &mut egui::Ui, roi: Option<&RoiRect>) {
    let values = [
        ("x", roi.map(|r| r.x)),
        ("y", roi.map(|r| r.y)),
        ("w", roi.map(|r| r.width)),
        ("h", roi.map(|r| r.height)),
    ];

    egui::Grid::new("roi_outputs").num_columns(2).show(ui, |ui| {
        for (label, value) in values {
            let mut text = value.map(|v| v.to_string()).unwrap_or_default();
            ui.label(label);
            ui.add_enabled(
                false,
                egui::TextEdit::singleline(&mut text).desired_width(80.0),
            );
            ui.end_row();
        }
    });
}

fn submit(app: &mut RoimarkApp) {
    // Submission guard: without a committed selection nothing happens.
    let Some(roi) = app.ui_state.selector.as_ref().and_then(|s| s.submit()) else {
        return;
    };
    let Some(source) = app.viewport.source.as_ref() else {
        return;
    };

    let Some(path) = rfd::FileDialog::new()
        .add_filter("PNG image", &["png"])
        .set_file_name("crop.png")
        .save_file()
    else {
        return;
    };

    let result = crop_image(source, &roi)
        .map_err(anyhow::Error::from)
        .and_then(|img| img.save(&path).map_err(anyhow::Error::from));

    match result {
        Ok(()) => app
            .ui_state
            .add_log(format!("Saved crop: {}", path.display())),
        Err(e) => {
            tracing::warn!("save crop failed: {e:#}");
            app.ui_state.add_log(format!("ERROR: {e:#}"));
        }
    }
}
