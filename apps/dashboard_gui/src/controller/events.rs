//! Events the fetch worker sends back to the UI thread.

use client_core::RequestTicket;
use shared::{
    domain::{LegacyOrder, Order, SalesSummary},
    error::FetchError,
};

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    OrdersLoaded {
        ticket: RequestTicket,
        result: Result<Vec<Order>, FetchError>,
    },
    LegacyOrdersLoaded {
        ticket: RequestTicket,
        result: Result<Vec<LegacyOrder>, FetchError>,
    },
    SalesSummaryLoaded {
        ticket: RequestTicket,
        result: Result<SalesSummary, FetchError>,
    },
}
