use crate::app::RoimarkApp;

pub fn show(ctx: &egui::Context, app: &mut RoimarkApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area — fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space to prevent layout jump.
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(size) = app.viewport.natural_size {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
                ui.label(format!("Scale: {:.0}%", app.viewport.display_scale * 100.0));
                ui.separator();
            }
            let state = match app.ui_state.selector.as_ref() {
                Some(s) if s.is_dragging() => "selecting...",
                Some(s) if s.selection().is_some() => "region selected",
                Some(_) => "no region",
                None => "no image",
            };
            ui.label(state);
        });

        ui.add_space(2.0);
    });
}
