use shared::domain::{DisplayRow, Order};

/// Flattens orders into one row per item, keeping order-then-item sequence.
/// Orders without items contribute nothing.
pub fn project_rows(orders: &[Order]) -> Vec<DisplayRow> {
    let mut rows = Vec::with_capacity(row_count(orders));
    for order in orders {
        rows.extend(
            order
                .order_items
                .iter()
                .enumerate()
                .map(|(item_index, item)| DisplayRow::new(order, item_index, item)),
        );
    }
    rows
}

pub fn row_count(orders: &[Order]) -> usize {
    orders.iter().map(|order| order.order_items.len()).sum()
}

#[cfg(test)]
#[path = "tests/projection_tests.rs"]
mod tests;
