use std::future::Future;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{
    domain::{LegacyOrder, Order, SalesSummary},
    error::FetchError,
    lenient,
    protocol::{
        OrdersEnvelope, SalesSummaryEnvelope, SalesSummaryQuery, LEGACY_ORDERS_PATH, ORDERS_PATH,
        SALES_SUMMARY_PATH,
    },
};
use tokio::sync::Mutex;
use tracing::{debug, error, info};

pub mod load_state;
pub mod settings;

pub use load_state::{LoadState, Loader, RequestTicket};
pub use settings::{load_settings, load_settings_with, Settings, DEFAULT_SETTINGS_FILE};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001";

/// A read-only API resource: where it lives, what it takes and what a view
/// gets out of its body.
pub trait Endpoint {
    const PATH: &'static str;
    type Query: Sync;
    type Response: DeserializeOwned;
    type Output;

    fn query_pairs(query: &Self::Query) -> Vec<(&'static str, String)>;
    fn extract(response: Self::Response) -> Self::Output;
}

pub struct OrdersEndpoint;

impl Endpoint for OrdersEndpoint {
    const PATH: &'static str = ORDERS_PATH;
    type Query = ();
    type Response = OrdersEnvelope;
    type Output = Vec<Order>;

    fn query_pairs(_query: &()) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn extract(response: OrdersEnvelope) -> Vec<Order> {
        response.orders
    }
}

pub struct LegacyOrdersEndpoint;

impl Endpoint for LegacyOrdersEndpoint {
    const PATH: &'static str = LEGACY_ORDERS_PATH;
    type Query = ();
    type Response = Vec<Value>;
    type Output = Vec<LegacyOrder>;

    fn query_pairs(_query: &()) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn extract(response: Vec<Value>) -> Vec<LegacyOrder> {
        response.into_iter().map(lenient::entry_or_default).collect()
    }
}

pub struct SalesSummaryEndpoint;

impl Endpoint for SalesSummaryEndpoint {
    const PATH: &'static str = SALES_SUMMARY_PATH;
    type Query = SalesSummaryQuery;
    type Response = SalesSummaryEnvelope;
    type Output = SalesSummary;

    fn query_pairs(query: &SalesSummaryQuery) -> Vec<(&'static str, String)> {
        query.to_pairs()
    }

    fn extract(response: SalesSummaryEnvelope) -> SalesSummary {
        response.sales_summary
    }
}

#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn orders(&self) -> Result<Vec<Order>, FetchError>;
    async fn legacy_orders(&self) -> Result<Vec<LegacyOrder>, FetchError>;
    async fn sales_summary(&self, query: &SalesSummaryQuery) -> Result<SalesSummary, FetchError>;
}

#[derive(Clone)]
pub struct DashboardClient {
    http: Client,
    base_url: String,
}

impl DashboardClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for<E: Endpoint>(&self) -> String {
        format!("{}{}", self.base_url, E::PATH)
    }

    /// One GET against `E`. Network failures, non-2xx answers and bodies that
    /// do not decode are all reported as [`FetchError`].
    pub async fn fetch<E: Endpoint>(&self, query: &E::Query) -> Result<E::Output, FetchError> {
        let pairs = E::query_pairs(query);
        info!(endpoint = E::PATH, params = pairs.len(), "fetching");

        match self.get_json::<E::Response>(E::PATH, &pairs).await {
            Ok(response) => {
                info!(endpoint = E::PATH, "fetched");
                Ok(E::extract(response))
            }
            Err(err) => {
                error!(endpoint = E::PATH, %err, "fetch failed");
                Err(err)
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &'static str,
        pairs: &[(&'static str, String)],
    ) -> Result<T, FetchError> {
        let mut request = self.http.get(format!("{}{path}", self.base_url));
        if !pairs.is_empty() {
            request = request.query(pairs);
        }

        let response = request
            .send()
            .await
            .map_err(|err| FetchError::transport(path, err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::transport(path, err.to_string()))?;
        serde_json::from_slice(&body).map_err(|err| FetchError::decode(path, err.to_string()))
    }
}

#[async_trait]
impl DashboardApi for DashboardClient {
    async fn orders(&self) -> Result<Vec<Order>, FetchError> {
        self.fetch::<OrdersEndpoint>(&()).await
    }

    async fn legacy_orders(&self) -> Result<Vec<LegacyOrder>, FetchError> {
        self.fetch::<LegacyOrdersEndpoint>(&()).await
    }

    async fn sales_summary(&self, query: &SalesSummaryQuery) -> Result<SalesSummary, FetchError> {
        self.fetch::<SalesSummaryEndpoint>(query).await
    }
}

/// Runs one fetch against `loader`: enters `Loading` under a fresh ticket,
/// awaits `fetch` without holding the lock, then settles the state unless a
/// newer request was issued meanwhile. Returns whether the result was applied.
pub async fn load<T, F>(loader: &Mutex<Loader<T>>, fetch: F) -> bool
where
    F: Future<Output = Result<T, FetchError>>,
{
    let ticket = loader.lock().await.begin();
    debug!(ticket = ticket.sequence(), "request started");
    let result = fetch.await;
    loader.lock().await.complete(ticket, result)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
