use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::lenient;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default, deserialize_with = "lenient::text")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub product_sku: Option<String>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub item_price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub item_cost_price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub quantity: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, deserialize_with = "lenient::text")]
    pub order_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::date")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub revenue: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub order_items: Vec<OrderItem>,
}

/// Row shape served by the flat `/api/orders` listing: one entry per sold item.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyOrder {
    #[serde(default, deserialize_with = "lenient::text")]
    pub item_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub sku: Option<String>,
    #[serde(default, deserialize_with = "lenient::date")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub shipping: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub item_price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub quantity: Option<i64>,
}

/// Aggregates for approved sales in a date range. The API sends every figure
/// as a string; see [`lenient::parse_decimal_prefix`] for how they are read.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SalesSummary {
    #[serde(
        rename = "receitaTotalVendasAprovadas",
        default,
        deserialize_with = "lenient::decimal"
    )]
    pub total_revenue: Option<Decimal>,
    #[serde(rename = "totalCustoImposto", default, deserialize_with = "lenient::decimal")]
    pub total_cost_and_tax: Option<Decimal>,
    #[serde(rename = "totalTarifasVenda", default, deserialize_with = "lenient::decimal")]
    pub total_selling_fees: Option<Decimal>,
    #[serde(
        rename = "totalFrete",
        default = "lenient::zero",
        deserialize_with = "lenient::decimal_or_zero"
    )]
    pub total_shipping: Option<Decimal>,
    #[serde(
        rename = "totalMargemContribuicao",
        default,
        deserialize_with = "lenient::decimal"
    )]
    pub total_contribution_margin: Option<Decimal>,
    #[serde(
        rename = "quantidadeVendasAprovadas",
        default,
        deserialize_with = "lenient::integer"
    )]
    pub approved_sales_count: Option<i64>,
    #[serde(rename = "ticketMedio", default, deserialize_with = "lenient::decimal")]
    pub average_ticket: Option<Decimal>,
    #[serde(rename = "ticketMedioMargem", default, deserialize_with = "lenient::decimal")]
    pub average_ticket_margin: Option<Decimal>,
}

/// One order item joined with the fields it shares with its parent order.
/// Identified by `(order_id, item_index)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayRow {
    pub order_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub revenue: Option<Decimal>,
    pub item_index: usize,
    pub product_name: Option<String>,
    pub product_sku: Option<String>,
    pub item_price: Option<Decimal>,
    pub item_cost_price: Option<Decimal>,
    pub quantity: Option<i64>,
}

impl DisplayRow {
    pub fn new(order: &Order, item_index: usize, item: &OrderItem) -> Self {
        Self {
            order_id: order.order_id.clone(),
            date: order.date,
            revenue: order.revenue,
            item_index,
            product_name: item.product_name.clone(),
            product_sku: item.product_sku.clone(),
            item_price: item.item_price,
            item_cost_price: item.item_cost_price,
            quantity: item.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn order_with_wrong_typed_fields_still_decodes() {
        let order: Order = serde_json::from_value(json!({
            "orderId": 1,
            "date": {"nested": true},
            "revenue": "not a number",
            "orderItems": [
                {"productName": "A", "itemPrice": 50, "quantity": 2},
                "garbage",
                {"productName": 7, "quantity": "3 un"}
            ]
        }))
        .expect("lenient order");

        assert_eq!(order.order_id.as_deref(), Some("1"));
        assert_eq!(order.date, None);
        assert_eq!(order.revenue, None);
        assert_eq!(order.order_items.len(), 3);
        assert_eq!(order.order_items[0].item_price, Some(Decimal::from(50)));
        assert_eq!(order.order_items[1], OrderItem::default());
        assert_eq!(order.order_items[2].product_name.as_deref(), Some("7"));
        assert_eq!(order.order_items[2].quantity, Some(3));
    }

    #[test]
    fn missing_or_scalar_items_decode_as_empty() {
        let missing: Order = serde_json::from_value(json!({"orderId": "9"})).expect("order");
        let scalar: Order =
            serde_json::from_value(json!({"orderId": "9", "orderItems": 4})).expect("order");
        assert!(missing.order_items.is_empty());
        assert!(scalar.order_items.is_empty());
    }

    #[test]
    fn summary_defaults_absent_shipping_to_zero() {
        let summary: SalesSummary = serde_json::from_value(json!({
            "receitaTotalVendasAprovadas": "1500.75",
            "quantidadeVendasAprovadas": "12.0",
            "ticketMedio": "abc"
        }))
        .expect("summary");

        assert_eq!(summary.total_revenue, Some(Decimal::new(150075, 2)));
        assert_eq!(summary.total_shipping, Some(Decimal::ZERO));
        assert_eq!(summary.approved_sales_count, Some(12));
        assert_eq!(summary.average_ticket, None);
        assert_eq!(summary.total_cost_and_tax, None);
    }

    #[test]
    fn summary_treats_null_and_blank_shipping_as_zero() {
        let null: SalesSummary =
            serde_json::from_value(json!({"totalFrete": null})).expect("summary");
        let blank: SalesSummary =
            serde_json::from_value(json!({"totalFrete": ""})).expect("summary");
        let set: SalesSummary =
            serde_json::from_value(json!({"totalFrete": "19.90"})).expect("summary");
        assert_eq!(null.total_shipping, Some(Decimal::ZERO));
        assert_eq!(blank.total_shipping, Some(Decimal::ZERO));
        assert_eq!(set.total_shipping, Some(Decimal::new(1990, 2)));
    }
}
