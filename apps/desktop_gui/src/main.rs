use std::{path::PathBuf, sync::Arc};

mod backend_bridge;
mod controller;
mod ui;

use anyhow::{anyhow, Context};
use clap::Parser;
use client_core::{load_settings, GeminiClient};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::BookRecommenderApp;

#[derive(Parser, Debug)]
#[command(name = "book-recommender-gui", version, about = "AI book recommendation desktop app")]
struct Args {
    /// Settings file (TOML); defaults to ./book_recommender.toml or the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let settings = load_settings(args.config.as_deref()).context("failed to load settings")?;
    let catalog = settings
        .load_catalog()
        .context("failed to load option catalog")?;
    tracing::info!(
        genres = catalog.genres.len(),
        model = %settings.model,
        "starting desktop GUI"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(
        cmd_rx,
        ui_tx,
        Arc::new(GeminiClient::from_settings(&settings)),
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("AI Book Recommendation")
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([480.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "AI Book Recommendation",
        options,
        Box::new(move |_cc| Ok(Box::new(BookRecommenderApp::new(catalog, cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow!("desktop GUI exited with an error: {err}"))
}
