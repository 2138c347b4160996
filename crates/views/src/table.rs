use shared::domain::{DisplayRow, LegacyOrder, Order};

use crate::{
    columns::OrderColumn,
    format::{format_brl, format_date, format_plain_brl, format_quantity, format_shipping},
    projection::project_rows,
    sort::{sort_rows, SortDirection, SortSpec},
};

pub const LEGACY_ORDERS_TITLE: &str = "Lista de Pedidos";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub label: &'static str,
    pub align: Align,
    /// Set on the column the rows are currently sorted by.
    pub sorted: Option<SortDirection>,
}

impl HeaderCell {
    fn plain(label: &'static str) -> Self {
        Self {
            label,
            align: Align::Left,
            sorted: None,
        }
    }
}

/// Header plus already formatted cells; every row has one cell per header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableView {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, label: &str) -> Option<Vec<&str>> {
        let index = self.headers.iter().position(|header| header.label == label)?;
        Some(self.rows.iter().map(|row| row[index].as_str()).collect())
    }
}

pub fn orders_table(orders: &[Order], sort: SortSpec) -> TableView {
    let headers = OrderColumn::ALL
        .into_iter()
        .map(|column| HeaderCell {
            label: column.label(),
            align: column.align(),
            sorted: (column == sort.column).then_some(sort.direction),
        })
        .collect();

    let rows = sort_rows(project_rows(orders), sort.column, sort.direction)
        .iter()
        .map(|row| {
            OrderColumn::ALL
                .into_iter()
                .map(|column| order_cell(row, column))
                .collect()
        })
        .collect();

    TableView { headers, rows }
}

fn order_cell(row: &DisplayRow, column: OrderColumn) -> String {
    match column {
        OrderColumn::OrderId => row.order_id.clone().unwrap_or_default(),
        OrderColumn::OrderDate => format_date(row.date),
        OrderColumn::ProductName => row.product_name.clone().unwrap_or_default(),
        OrderColumn::Sku => row.product_sku.clone().unwrap_or_default(),
        OrderColumn::UnitPrice => format_brl(row.item_price),
        OrderColumn::Quantity => format_quantity(row.quantity),
        OrderColumn::Revenue => format_brl(row.revenue),
        OrderColumn::Cost => format_brl(row.item_cost_price),
        OrderColumn::GovernmentTax
        | OrderColumn::SalesTax
        | OrderColumn::ShippingBuyer
        | OrderColumn::ShippingSeller
        | OrderColumn::ContributionMargin
        | OrderColumn::CmPercentage => String::new(),
    }
}

pub fn legacy_orders_table(orders: &[LegacyOrder]) -> TableView {
    let headers = [
        "Nome do Item",
        "SKU",
        "Data",
        "Frete",
        "Valor do Item",
        "Quantidade",
    ]
    .into_iter()
    .map(HeaderCell::plain)
    .collect();

    let rows = orders
        .iter()
        .map(|order| {
            vec![
                order.item_name.clone().unwrap_or_default(),
                order.sku.clone().unwrap_or_default(),
                format_date(order.date),
                format_shipping(order.shipping),
                format_plain_brl(order.item_price),
                format_quantity(order.quantity),
            ]
        })
        .collect();

    TableView { headers, rows }
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
