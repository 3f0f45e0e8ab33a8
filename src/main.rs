#![warn(clippy::all, rust_2018_idioms)]
// hide console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::{anyhow, Context};
use cancergui::{App, Dataset, ExplorerConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = ExplorerConfig::default();
    let dataset = Dataset::bundled().context("loading the bundled breast cancer dataset")?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&config.title)
            .with_inner_size(config.inner_size),
        ..Default::default()
    };

    log::info!("starting {}", config.title);
    let title = config.title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, dataset, &config)))),
    )
    .map_err(|e| anyhow!("{e}"))
}
