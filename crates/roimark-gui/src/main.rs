mod app;
mod convert;
mod panels;
mod state;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("Roimark"),
        ..Default::default()
    };

    eframe::run_native(
        "Roimark",
        options,
        Box::new(|_cc| Ok(Box::new(app::RoimarkApp::default()))),
    )
}
