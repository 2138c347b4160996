use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use client_core::{load, load_settings, DashboardApi, DashboardClient, LoadState, Loader};
use shared::protocol::SalesSummaryQuery;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;
use views::{
    legacy_orders_table, orders_table, summary_cards, table::LEGACY_ORDERS_TITLE, OrderColumn,
    SortDirection,
};

mod render;

#[derive(Parser, Debug)]
#[command(name = "dashboard", about = "Read-only view of orders and sales figures")]
struct Args {
    /// Base URL of the orders API; overrides the settings file and environment.
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Settings file to read instead of ./dashboard.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// One row per sold item, sorted by a single column.
    Orders {
        #[arg(long)]
        order_by: Option<OrderColumn>,
        #[arg(long)]
        direction: Option<SortDirection>,
    },
    /// Flat order list served by the older endpoint.
    LegacyOrders,
    /// Sales figures for approved orders in a date range.
    Summary {
        #[arg(long)]
        start_date: Option<NaiveDate>,
        #[arg(long)]
        end_date: Option<NaiveDate>,
        #[arg(long)]
        status: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref());
    if let Some(api_url) = &args.api_url {
        if !settings.set_api_base_url(api_url) {
            bail!("--api-url must be an absolute http(s) URL, got '{api_url}'");
        }
    }
    let client = DashboardClient::new(settings.api_base_url.clone());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let failed = match args.command {
        Command::Orders {
            order_by,
            direction,
        } => {
            let mut sort = settings.orders_sort;
            if let Some(column) = order_by {
                sort.column = column;
            }
            if let Some(direction) = direction {
                sort.direction = direction;
            }

            let state = fetch_into_state(client.orders()).await;
            render::write_state(&mut out, &state, |out, orders| {
                render::write_table(out, &orders_table(orders, sort))
            })
            .context("writing orders table")?;
            matches!(state, LoadState::Failed(_))
        }
        Command::LegacyOrders => {
            let state = fetch_into_state(client.legacy_orders()).await;
            writeln!(out, "{LEGACY_ORDERS_TITLE}")?;
            render::write_state(&mut out, &state, |out, orders| {
                render::write_table(out, &legacy_orders_table(orders))
            })
            .context("writing order list")?;
            matches!(state, LoadState::Failed(_))
        }
        Command::Summary {
            start_date,
            end_date,
            status,
        } => {
            if let Some(status) = status {
                settings.set_summary_status(&status);
            }
            if let (Some(start), Some(end)) = (start_date, end_date) {
                if start > end {
                    tracing::warn!(%start, %end, "start date is after end date");
                }
            }
            let query = SalesSummaryQuery {
                start_date,
                end_date,
                status: settings.summary_status.clone(),
            };

            let state = fetch_into_state(client.sales_summary(&query)).await;
            render::write_state(&mut out, &state, |out, summary| {
                render::write_cards(out, &summary_cards(summary))
            })
            .context("writing sales summary")?;
            matches!(state, LoadState::Failed(_))
        }
    };

    out.flush()?;
    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

async fn fetch_into_state<T, F>(fetch: F) -> LoadState<T>
where
    F: std::future::Future<Output = Result<T, shared::error::FetchError>>,
{
    let loader = Mutex::new(Loader::new());
    load(&loader, fetch).await;
    loader.into_inner().into_state()
}
