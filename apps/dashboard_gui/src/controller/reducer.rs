//! UI-side dashboard state: one loader per view plus the summary filter.

use chrono::{NaiveDate, ParseError};
use client_core::{Loader, Settings};
use shared::{
    domain::{LegacyOrder, Order, SalesSummary},
    error::FetchError,
    protocol::SalesSummaryQuery,
};
use views::SortSpec;

use crate::{backend_bridge::commands::BackendCommand, controller::events::UiEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Orders,
    LegacyOrders,
    SalesSummary,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Orders, Tab::LegacyOrders, Tab::SalesSummary];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Orders => "Pedidos",
            Tab::LegacyOrders => "Lista de Pedidos",
            Tab::SalesSummary => "Resumo de Vendas",
        }
    }
}

/// Text typed into the summary filter; parsed only when the filter is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryFilter {
    pub start_input: String,
    pub end_input: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    InvalidStartDate,
    InvalidEndDate,
}

impl FilterError {
    pub fn message(&self) -> &'static str {
        match self {
            FilterError::InvalidStartDate => "Data inicial inválida (use dd/mm/aaaa ou aaaa-mm-dd)",
            FilterError::InvalidEndDate => "Data final inválida (use dd/mm/aaaa ou aaaa-mm-dd)",
        }
    }
}

/// Blank means "no bound". Accepts the displayed `dd/mm/yyyy` form and ISO dates.
fn parse_filter_date(raw: &str) -> Result<Option<NaiveDate>, ParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .map(Some)
}

impl SummaryFilter {
    pub fn to_query(&self) -> Result<SalesSummaryQuery, FilterError> {
        let start_date =
            parse_filter_date(&self.start_input).map_err(|_| FilterError::InvalidStartDate)?;
        let end_date =
            parse_filter_date(&self.end_input).map_err(|_| FilterError::InvalidEndDate)?;
        let status = self.status.trim();
        Ok(SalesSummaryQuery {
            start_date,
            end_date,
            status: if status.is_empty() {
                SalesSummaryQuery::default().status
            } else {
                status.to_string()
            },
        })
    }
}

#[derive(Debug)]
pub struct DashboardState {
    pub tab: Tab,
    pub orders: Loader<Vec<Order>>,
    pub legacy_orders: Loader<Vec<LegacyOrder>>,
    pub summary: Loader<SalesSummary>,
    pub orders_sort: SortSpec,
    pub filter: SummaryFilter,
    pub status: String,
}

impl DashboardState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            tab: Tab::default(),
            orders: Loader::new(),
            legacy_orders: Loader::new(),
            summary: Loader::new(),
            orders_sort: settings.orders_sort,
            filter: SummaryFilter {
                status: settings.summary_status.clone(),
                ..SummaryFilter::default()
            },
            status: String::new(),
        }
    }

    /// Every view loads once at startup.
    pub fn initial_commands(&mut self) -> Vec<BackendCommand> {
        let mut commands = vec![self.request_orders(), self.request_legacy_orders()];
        commands.extend(self.request_sales_summary());
        commands
    }

    pub fn request_orders(&mut self) -> BackendCommand {
        BackendCommand::FetchOrders {
            ticket: self.orders.begin(),
        }
    }

    pub fn request_legacy_orders(&mut self) -> BackendCommand {
        BackendCommand::FetchLegacyOrders {
            ticket: self.legacy_orders.begin(),
        }
    }

    /// `None` when the filter does not parse; the summary keeps what it shows
    /// and the problem goes to the status line.
    pub fn request_sales_summary(&mut self) -> Option<BackendCommand> {
        match self.filter.to_query() {
            Ok(query) => {
                self.status.clear();
                Some(BackendCommand::FetchSalesSummary {
                    ticket: self.summary.begin(),
                    query,
                })
            }
            Err(err) => {
                self.status = err.message().to_string();
                None
            }
        }
    }

    pub fn refresh_current_tab(&mut self) -> Option<BackendCommand> {
        match self.tab {
            Tab::Orders => Some(self.request_orders()),
            Tab::LegacyOrders => Some(self.request_legacy_orders()),
            Tab::SalesSummary => self.request_sales_summary(),
        }
    }

    /// Settles the view a command was meant for when it never reached the worker.
    pub fn command_not_sent(&mut self, cmd: BackendCommand) {
        let err = FetchError::transport(cmd.endpoint(), "command queue unavailable");
        let ticket = cmd.ticket();
        match cmd {
            BackendCommand::FetchOrders { .. } => {
                self.orders.complete(ticket, Err(err));
            }
            BackendCommand::FetchLegacyOrders { .. } => {
                self.legacy_orders.complete(ticket, Err(err));
            }
            BackendCommand::FetchSalesSummary { .. } => {
                self.summary.complete(ticket, Err(err));
            }
        }
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => self.status = message,
            UiEvent::OrdersLoaded { ticket, result } => {
                self.orders.complete(ticket, result);
            }
            UiEvent::LegacyOrdersLoaded { ticket, result } => {
                self.legacy_orders.complete(ticket, result);
            }
            UiEvent::SalesSummaryLoaded { ticket, result } => {
                self.summary.complete(ticket, result);
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
