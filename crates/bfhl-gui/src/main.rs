//! BFHL Studio - Desktop GUI Application
//!
//! A desktop client for the BFHL classification endpoint: compose a JSON
//! payload, attach a file, and review the categorized response.

use eframe::egui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("BFHL Studio")
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "BFHL Studio",
        options,
        Box::new(|cc| Ok(Box::new(bfhl_gui::app::StudioApp::new(cc)))),
    )
}
