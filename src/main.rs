use eframe::egui;
use sentimentsense::gui::SentimentApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("SentimentSense")
            .with_inner_size([760.0, 900.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SentimentSense",
        options,
        Box::new(|cc| Ok(Box::new(SentimentApp::new(cc)?))),
    )
}
