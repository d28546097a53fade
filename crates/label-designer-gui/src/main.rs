#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::{Context, anyhow};
use eframe::egui;
use label_designer::DesignerSettings;

mod app;
mod logger;
mod ui_components;
mod views;

use logger::AppLogger;

const MAX_LOG_ENTRIES: usize = 500;

fn main() -> anyhow::Result<()> {
    let logger = AppLogger::new(MAX_LOG_ENTRIES);
    logger.clone().init().context("Failed to install logger")?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let handle = runtime.handle().clone();

    // Optional settings file as the only argument
    let settings = match std::env::args_os().nth(1) {
        Some(path) => match runtime.block_on(DesignerSettings::load(&path)) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.to_string_lossy());
                settings
            }
            Err(e) => {
                log::error!("Failed to load settings: {}", e);
                DesignerSettings::default()
            }
        },
        None => DesignerSettings::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("Label Designer")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Label Designer",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::LabelDesignerApp::new(
                cc, handle, settings, logger,
            )?))
        }),
    )
    .map_err(|e| anyhow!("GUI failed: {e}"))
}
