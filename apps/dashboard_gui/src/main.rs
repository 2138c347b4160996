use std::{path::PathBuf, sync::Arc};

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use clap::Parser;
use client_core::{load_settings, DashboardClient};
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;
use ui::app::DashboardApp;

const WINDOW_TITLE: &str = "Dashboard de Vendas";

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the orders API; overrides the settings file and environment.
    #[arg(long)]
    api_url: Option<String>,
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref());
    if let Some(api_url) = &args.api_url {
        settings.set_api_base_url(api_url);
    }
    tracing::info!(api = %settings.api_base_url, "starting dashboard");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    let api = Arc::new(DashboardClient::new(settings.api_base_url.clone()));
    backend_bridge::runtime::launch(api, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(cmd_tx, ui_rx, &settings)))),
    )
}
