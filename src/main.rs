//! Clawdbot Explorer
//!
//! A native showcase for the Clawdbot automation platform, with a live
//! (simulated) view of messages moving between gateway, agents and tools.

mod app;
mod content;
mod graph;
mod motion;
mod section;
mod settings;
mod simulation;
mod theme;
mod visualization;

use eframe::egui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 860.0])
            .with_title("Clawdbot Explorer"),
        persist_window: true, // Persist window state between sessions
        ..Default::default()
    };

    eframe::run_native(
        "Clawdbot Explorer",
        options,
        Box::new(|cc| Ok(Box::new(app::ExplorerApp::new(cc)))),
    )
}
