//! Lility Desktop - window front end for the Lility slicer
//!
//! This crate draws the session held by `lility-core` and turns pointer,
//! button and keyboard input into engine calls. It owns no slicing logic.
//!
//! # Module Structure
//!
//! - `app` - The eframe application: toolbar, navigation, status line
//! - `canvas` - Letterboxed image and guide-line painting
//! - `dialogs` - Start-number prompt, settings editor, message boxes
//! - `shortcuts` - Configured shortcuts mapped onto egui input
//! - `texture` - Preview texture upload and caching

mod app;
mod canvas;
mod dialogs;
mod shortcuts;
mod texture;

use std::path::PathBuf;

use lility_core::Settings;
use log::info;

pub use app::SlicerApp;

/// Open the main window and block until it is closed.
pub fn run(settings_path: PathBuf) -> eframe::Result {
    let settings = Settings::load(&settings_path);
    info!("Starting with settings from {}", settings_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Lility Slicer"),
        ..Default::default()
    };
    eframe::run_native(
        "Lility Slicer",
        options,
        Box::new(|cc| Ok(Box::new(SlicerApp::new(cc, settings, settings_path)))),
    )
}

/// Get the version of the front end
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
