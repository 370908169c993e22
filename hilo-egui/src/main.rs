use anyhow::anyhow;
use eframe::egui;
use hilo_egui::GuessApp;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Guess a Number")
            .with_inner_size([340.0, 380.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Guess a Number",
        options,
        Box::new(|_cc| Ok(Box::new(GuessApp::new()) as Box<dyn eframe::App>)),
    )
    .map_err(|e| anyhow!("egui error: {e}"))
}
