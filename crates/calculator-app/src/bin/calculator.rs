//! Calculator desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop calculator.

use calculator_app::{CalculatorApp, version};

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.gifnksm.calculator";

    better_panic::install();
    env_logger::init();

    log::info!("Starting Calculator, version={}", version::build_version());

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_title("Calculator")
            .with_resizable(true)
            .with_inner_size((300.0, 380.0))
            .with_min_inner_size((200.0, 250.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Calculator",
        options,
        Box::new(|cc| Ok(Box::new(CalculatorApp::new(cc)))),
    )
}
