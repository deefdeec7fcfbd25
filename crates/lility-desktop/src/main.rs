#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use lility_core::Settings;

fn main() -> eframe::Result {
    env_logger::init();
    log::info!("Lility Slicer {}", lility_desktop::version());
    lility_desktop::run(Settings::default_path())
}
