use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use shared::domain::DisplayRow;
use thiserror::Error;

use crate::{
    sort::{ColumnKind, SortKey, Sortable},
    table::Align,
};

/// Columns of the primary orders table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderColumn {
    OrderId,
    OrderDate,
    ProductName,
    Sku,
    UnitPrice,
    Quantity,
    Revenue,
    Cost,
    GovernmentTax,
    SalesTax,
    ShippingBuyer,
    ShippingSeller,
    ContributionMargin,
    CmPercentage,
}

impl OrderColumn {
    pub const ALL: [OrderColumn; 14] = [
        OrderColumn::OrderId,
        OrderColumn::OrderDate,
        OrderColumn::ProductName,
        OrderColumn::Sku,
        OrderColumn::UnitPrice,
        OrderColumn::Quantity,
        OrderColumn::Revenue,
        OrderColumn::Cost,
        OrderColumn::GovernmentTax,
        OrderColumn::SalesTax,
        OrderColumn::ShippingBuyer,
        OrderColumn::ShippingSeller,
        OrderColumn::ContributionMargin,
        OrderColumn::CmPercentage,
    ];

    pub fn id(self) -> &'static str {
        match self {
            OrderColumn::OrderId => "orderId",
            OrderColumn::OrderDate => "orderDate",
            OrderColumn::ProductName => "productName",
            OrderColumn::Sku => "sku",
            OrderColumn::UnitPrice => "unitPrice",
            OrderColumn::Quantity => "quantity",
            OrderColumn::Revenue => "revenue",
            OrderColumn::Cost => "cost",
            OrderColumn::GovernmentTax => "governmentTax",
            OrderColumn::SalesTax => "salesTax",
            OrderColumn::ShippingBuyer => "shippingBuyer",
            OrderColumn::ShippingSeller => "shippingSeller",
            OrderColumn::ContributionMargin => "contributionMargin",
            OrderColumn::CmPercentage => "cmPercentage",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderColumn::OrderId => "Order ID",
            OrderColumn::OrderDate => "Data da venda",
            OrderColumn::ProductName => "Nome do produto",
            OrderColumn::Sku => "SKU",
            OrderColumn::UnitPrice => "Preço por unidade",
            OrderColumn::Quantity => "Quantidade",
            OrderColumn::Revenue => "Receita (T)",
            OrderColumn::Cost => "Custo (-)",
            OrderColumn::GovernmentTax => "Imposto (-)",
            OrderColumn::SalesTax => "Tarifa de venda (-)",
            OrderColumn::ShippingBuyer => "Frete comprador (-)",
            OrderColumn::ShippingSeller => "Frete seller (-)",
            OrderColumn::ContributionMargin => "Margem contribuição (=)",
            OrderColumn::CmPercentage => "MC em %",
        }
    }

    pub fn align(self) -> Align {
        match self {
            OrderColumn::OrderDate | OrderColumn::UnitPrice => Align::Right,
            _ => Align::Left,
        }
    }

    pub fn kind(self) -> ColumnKind {
        match self {
            OrderColumn::OrderDate => ColumnKind::Date,
            OrderColumn::ProductName | OrderColumn::Sku => ColumnKind::Text,
            _ => ColumnKind::Number,
        }
    }

    /// Columns the backend does not serve yet; they render empty.
    pub fn is_placeholder(self) -> bool {
        matches!(
            self,
            OrderColumn::GovernmentTax
                | OrderColumn::SalesTax
                | OrderColumn::ShippingBuyer
                | OrderColumn::ShippingSeller
                | OrderColumn::ContributionMargin
                | OrderColumn::CmPercentage
        )
    }
}

impl fmt::Display for OrderColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown column '{0}'")]
pub struct UnknownColumn(pub String);

impl FromStr for OrderColumn {
    type Err = UnknownColumn;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim();
        OrderColumn::ALL
            .into_iter()
            .find(|column| column.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownColumn(raw.to_string()))
    }
}

impl Sortable for DisplayRow {
    type Column = OrderColumn;

    fn sort_key(&self, column: OrderColumn) -> SortKey {
        if column.is_placeholder() {
            return SortKey::Missing;
        }
        match column {
            OrderColumn::OrderId => SortKey::parse(column.kind(), self.order_id.as_deref()),
            OrderColumn::OrderDate => SortKey::date(self.date),
            OrderColumn::ProductName => SortKey::text(self.product_name.as_deref()),
            OrderColumn::Sku => SortKey::text(self.product_sku.as_deref()),
            OrderColumn::UnitPrice => SortKey::number(self.item_price),
            OrderColumn::Quantity => SortKey::number(self.quantity.map(Decimal::from)),
            OrderColumn::Revenue => SortKey::number(self.revenue),
            OrderColumn::Cost => SortKey::number(self.item_cost_price),
            _ => SortKey::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_str() {
        for column in OrderColumn::ALL {
            assert_eq!(column.id().parse::<OrderColumn>(), Ok(column));
        }
        assert_eq!("ORDERID".parse::<OrderColumn>(), Ok(OrderColumn::OrderId));
        assert!("price".parse::<OrderColumn>().is_err());
    }

    #[test]
    fn six_trailing_columns_are_placeholders() {
        let placeholders: Vec<OrderColumn> = OrderColumn::ALL
            .into_iter()
            .filter(|column| column.is_placeholder())
            .collect();
        assert_eq!(placeholders, OrderColumn::ALL[8..].to_vec());
    }

    #[test]
    fn order_id_sorts_numerically_when_numeric() {
        let row = |id: &str| DisplayRow {
            order_id: Some(id.to_string()),
            ..DisplayRow::default()
        };
        assert!(
            row("9").sort_key(OrderColumn::OrderId) < row("10").sort_key(OrderColumn::OrderId)
        );
        assert_eq!(row("A-1").sort_key(OrderColumn::OrderId), SortKey::Missing);
    }
}
