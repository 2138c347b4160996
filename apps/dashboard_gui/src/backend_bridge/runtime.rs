//! Worker thread that turns queued commands into API reads.

use std::{sync::Arc, thread};

use client_core::DashboardApi;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Spawns the fetch worker. Each command runs as its own task, so a slow read
/// never holds up the next one; the UI decides which results still count.
pub fn launch(
    api: Arc<dyn DashboardApi>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Info(format!(
                    "Falha ao iniciar o processo de busca: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        for cmd in cmd_rx.iter() {
            tracing::debug!(command = cmd.name(), ticket = cmd.ticket().sequence(), "running");
            runtime.spawn(run_command(api.clone(), cmd, ui_tx.clone()));
        }
        tracing::info!("command queue closed; backend worker stopping");
    })
}

async fn run_command(api: Arc<dyn DashboardApi>, cmd: BackendCommand, ui_tx: Sender<UiEvent>) {
    let event = match cmd {
        BackendCommand::FetchOrders { ticket } => UiEvent::OrdersLoaded {
            ticket,
            result: api.orders().await,
        },
        BackendCommand::FetchLegacyOrders { ticket } => UiEvent::LegacyOrdersLoaded {
            ticket,
            result: api.legacy_orders().await,
        },
        BackendCommand::FetchSalesSummary { ticket, query } => UiEvent::SalesSummaryLoaded {
            ticket,
            result: api.sales_summary(&query).await,
        },
    };

    if ui_tx.try_send(event).is_err() {
        tracing::warn!("ui event queue unavailable; dropping fetch result");
    }
}
