//! Commands the UI thread queues for the fetch worker.

use client_core::RequestTicket;
use shared::protocol::{
    SalesSummaryQuery, LEGACY_ORDERS_PATH, ORDERS_PATH, SALES_SUMMARY_PATH,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    FetchOrders {
        ticket: RequestTicket,
    },
    FetchLegacyOrders {
        ticket: RequestTicket,
    },
    FetchSalesSummary {
        ticket: RequestTicket,
        query: SalesSummaryQuery,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::FetchOrders { .. } => "fetch_orders",
            BackendCommand::FetchLegacyOrders { .. } => "fetch_legacy_orders",
            BackendCommand::FetchSalesSummary { .. } => "fetch_sales_summary",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            BackendCommand::FetchOrders { .. } => ORDERS_PATH,
            BackendCommand::FetchLegacyOrders { .. } => LEGACY_ORDERS_PATH,
            BackendCommand::FetchSalesSummary { .. } => SALES_SUMMARY_PATH,
        }
    }

    pub fn ticket(&self) -> RequestTicket {
        match self {
            BackendCommand::FetchOrders { ticket }
            | BackendCommand::FetchLegacyOrders { ticket }
            | BackendCommand::FetchSalesSummary { ticket, .. } => *ticket,
        }
    }
}
