use roimark_core::geometry::{DisplayPoint, ViewBounds};

use crate::app::RoimarkApp;

pub fn show(ctx: &egui::Context, app: &mut RoimarkApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let texture_info = app
            .viewport
            .texture
            .as_ref()
            .map(|t| (t.id(), [t.size()[0] as f32, t.size()[1] as f32]));

        if let Some((texture_id, tex_size)) = texture_info {
            let img_rect = fit_image_rect(rect, egui::vec2(tex_size[0], tex_size[1]));
            app.viewport.display_scale = img_rect.width() / tex_size[0];

            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
            handle_gestures(ctx, ui, &response, app, img_rect);

            draw_image(ui, texture_id, img_rect);
            draw_overlay(ui, app, img_rect);
        } else {
            show_placeholder(ui);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Center the image in the panel, shrunk to fit but never enlarged past
/// native size. The resulting rect is the view the selector works in.
fn fit_image_rect(rect: egui::Rect, image_size: egui::Vec2) -> egui::Rect {
    let scale = (rect.width() / image_size.x)
        .min(rect.height() / image_size.y)
        .min(1.0);
    egui::Rect::from_center_size(rect.center(), image_size * scale)
}

fn handle_gestures(
    ctx: &egui::Context,
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut RoimarkApp,
    img_rect: egui::Rect,
) {
    let Some(selector) = app.ui_state.selector.as_mut() else {
        return;
    };

    let bounds = ViewBounds::new(img_rect.width(), img_rect.height());
    let local =
        |pos: egui::Pos2| DisplayPoint::new(pos.x - img_rect.left(), pos.y - img_rect.top());

    if let Some(hover) = ui.input(|i| i.pointer.hover_pos()) {
        if img_rect.contains(hover) || selector.is_dragging() {
            ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
        }
    }

    if response.drag_started_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            if img_rect.contains(pos) {
                selector.gesture_start(local(pos), bounds, true);
            }
        }
    }

    // Moves and the release are read from global pointer state, so a gesture
    // that leaves the image keeps updating and still ends cleanly.
    if selector.is_dragging() {
        if let Some(pos) = ui.input(|i| i.pointer.latest_pos()) {
            selector.gesture_update(local(pos), bounds);
        }
    }

    let committed = if response.drag_stopped_by(egui::PointerButton::Primary) {
        ui.input(|i| i.pointer.latest_pos())
            .and_then(|pos| selector.gesture_end(local(pos), bounds))
    } else {
        None
    };

    if let Some(roi) = committed {
        app.ui_state.add_log(format!(
            "Selected {}x{} at ({}, {})",
            roi.width, roi.height, roi.x, roi.y
        ));
    }
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_overlay(ui: &egui::Ui, app: &RoimarkApp, img_rect: egui::Rect) {
    let Some(overlay) = app.ui_state.selector.as_ref().and_then(|s| s.overlay()) else {
        return;
    };

    let rect = egui::Rect::from_min_size(
        img_rect.left_top() + egui::vec2(overlay.left, overlay.top),
        egui::vec2(overlay.width, overlay.height),
    );

    ui.painter().rect_filled(
        rect,
        0.0,
        egui::Color32::from_rgba_unmultiplied(0, 163, 255, 38),
    );
    ui.painter().rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(2.0, egui::Color32::from_rgb(0, 163, 255)),
        egui::epaint::StrokeKind::Outside,
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open an image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
