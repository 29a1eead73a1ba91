#![warn(clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::NativeOptions;

pub mod chart;
pub mod config;
pub mod error;
pub mod numerics;
pub mod panel;
pub mod ui;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let settings = config::Settings::default();
    let native_options = NativeOptions {
        initial_window_size: Some(settings.window_size),
        ..NativeOptions::default()
    };
    tracing::info!(samples = settings.samples, "starting");
    eframe::run_native(
        "Distribution Plotter",
        native_options,
        Box::new(|cc| Box::new(ui::DistPlot::new(cc, settings))),
    )?;
    Ok(())
}
