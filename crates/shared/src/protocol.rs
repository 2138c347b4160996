use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    domain::{Order, SalesSummary},
    lenient,
};

pub const ORDERS_PATH: &str = "/api/orders/db";
pub const LEGACY_ORDERS_PATH: &str = "/api/orders";
pub const SALES_SUMMARY_PATH: &str = "/api/reports/salesSummary";

pub const DEFAULT_SALE_STATUS: &str = "paid";

/// Body of `GET /api/orders/db`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrdersEnvelope {
    #[serde(default, deserialize_with = "lenient::list")]
    pub orders: Vec<Order>,
}

/// Body of `GET /api/reports/salesSummary`.
#[derive(Debug, Clone, Deserialize)]
pub struct SalesSummaryEnvelope {
    #[serde(rename = "resumoVendas")]
    pub sales_summary: SalesSummary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesSummaryQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: String,
}

impl Default for SalesSummaryQuery {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            status: DEFAULT_SALE_STATUS.to_string(),
        }
    }
}

impl SalesSummaryQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(start) = self.start_date {
            pairs.push(("startDate", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("endDate", end.format("%Y-%m-%d").to_string()));
        }
        pairs.push(("status", self.status.clone()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn envelope_without_orders_array_is_empty() {
        for body in [json!({}), json!({"orders": null}), json!({"orders": "x"})] {
            let envelope: OrdersEnvelope = serde_json::from_value(body).expect("envelope");
            assert!(envelope.orders.is_empty());
        }
    }

    #[test]
    fn summary_envelope_requires_resumo_vendas() {
        assert!(serde_json::from_value::<SalesSummaryEnvelope>(json!({})).is_err());
        assert!(
            serde_json::from_value::<SalesSummaryEnvelope>(json!({"resumoVendas": {}})).is_ok()
        );
    }

    #[test]
    fn query_pairs_skip_unset_dates() {
        let query = SalesSummaryQuery {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            ..SalesSummaryQuery::default()
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("startDate", "2024-01-01".to_string()),
                ("status", "paid".to_string())
            ]
        );
    }
}
