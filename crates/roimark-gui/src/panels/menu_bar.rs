use anyhow::Context as _;

use roimark_core::selector::SelectorConfig;

use crate::app::RoimarkApp;

pub fn show(ctx: &egui::Context, app: &mut RoimarkApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui
                    .add(
                        egui::Button::new("Open Image...")
                            .shortcut_text(ctx.format_shortcut(&open_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    open_image(ctx, app);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                if ui.button("Quit").clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::O,
            ))
        }) {
            open_image(ctx, app);
        }
    });
}

fn open_image(ctx: &egui::Context, app: &mut RoimarkApp) {
    if let Some(path) = rfd::FileDialog::new()
        .add_filter(
            "Images",
            &["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"],
        )
        .pick_file()
    {
        app.open_image(ctx, path);
    }
}

fn import_config(app: &mut RoimarkApp) {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("TOML", &["toml"])
        .pick_file()
    else {
        return;
    };

    match read_config(&path) {
        Ok(config) => {
            if let Some(selector) = app.ui_state.selector.as_mut() {
                selector.set_config(config.clone());
            }
            app.ui_state.config = config;
            app.ui_state
                .add_log(format!("Config imported: {}", path.display()));
        }
        Err(e) => app.ui_state.add_log(format!("ERROR: {e:#}")),
    }
}

fn read_config(path: &std::path::Path) -> anyhow::Result<SelectorConfig> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config = toml::from_str(&text).with_context(|| format!("parse {}", path.display()))?;
    Ok(config)
}

fn export_config(app: &mut RoimarkApp) {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("TOML", &["toml"])
        .set_file_name("roimark.toml")
        .save_file()
    else {
        return;
    };

    match write_config(&app.ui_state.config, &path) {
        Ok(()) => app
            .ui_state
            .add_log(format!("Config exported: {}", path.display())),
        Err(e) => app.ui_state.add_log(format!("ERROR: {e:#}")),
    }
}

fn write_config(config: &SelectorConfig, path: &std::path::Path) -> anyhow::Result<()> {
    let text = toml::to_string_pretty(config)?;
    std::fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
