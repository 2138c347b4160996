//! Plain-text drawing of dashboard views for a terminal.

use std::io::{self, Write};

use client_core::LoadState;
use views::{Align, CardTone, HeaderCell, SummaryCard, TableView};

pub const LOADING_TEXT: &str = "Carregando...";

const COLUMN_GAP: &str = "  ";

/// Draws whichever of loading text, error text or content `state` calls for.
pub fn write_state<W, T, F>(out: &mut W, state: &LoadState<T>, content: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce(&mut W, &T) -> io::Result<()>,
{
    match state {
        LoadState::Loading => writeln!(out, "{LOADING_TEXT}"),
        LoadState::Ready(data) => content(out, data),
        LoadState::Failed(message) => writeln!(out, "{message}"),
    }
}

fn header_text(header: &HeaderCell) -> String {
    match header.sorted {
        Some(direction) => format!("{} {}", header.label, direction.arrow()),
        None => header.label.to_string(),
    }
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => format!("{cell:<width$}"),
        Align::Right => format!("{cell:>width$}"),
    }
}

fn join_cells(cells: impl Iterator<Item = String>) -> String {
    cells.collect::<Vec<_>>().join(COLUMN_GAP)
}

pub fn write_table<W: Write>(out: &mut W, table: &TableView) -> io::Result<()> {
    let headers: Vec<String> = table.headers.iter().map(header_text).collect();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &table.rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header_line = join_cells(
        headers
            .iter()
            .zip(&table.headers)
            .zip(&widths)
            .map(|((text, header), width)| pad(text, *width, header.align)),
    );
    writeln!(out, "{}", header_line.trim_end())?;
    writeln!(
        out,
        "{}",
        join_cells(widths.iter().map(|width| "-".repeat(*width)))
    )?;

    for row in &table.rows {
        let row_line = join_cells(
            row.iter()
                .zip(&table.headers)
                .zip(&widths)
                .map(|((cell, header), width)| pad(cell, *width, header.align)),
        );
        writeln!(out, "{}", row_line.trim_end())?;
    }
    Ok(())
}

pub fn write_cards<W: Write>(out: &mut W, cards: &[SummaryCard]) -> io::Result<()> {
    let width = cards
        .iter()
        .map(|card| card.title.chars().count())
        .max()
        .unwrap_or(0);
    for card in cards {
        let marker = match card.tone {
            CardTone::Loss => "!",
            CardTone::Neutral => " ",
        };
        writeln!(out, "{marker} {:<width$}  {}", card.title, card.value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use shared::domain::{LegacyOrder, Order, OrderItem, SalesSummary};
    use views::{legacy_orders_table, orders_table, summary_cards, SortSpec};

    use super::*;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(draw: F) -> String {
        let mut out = Vec::new();
        draw(&mut out).expect("write");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn loading_and_failure_replace_content() {
        let loading: LoadState<Vec<Order>> = LoadState::Loading;
        let failed: LoadState<Vec<Order>> = LoadState::Failed("Erro ao carregar os dados".into());

        let text = render(|out| write_state(out, &loading, |_, _| unreachable!()));
        assert_eq!(text, "Carregando...\n");

        let text = render(|out| write_state(out, &failed, |_, _| unreachable!()));
        assert_eq!(text, "Erro ao carregar os dados\n");
    }

    #[test]
    fn empty_orders_render_headers_only() {
        let state = LoadState::Ready(Vec::<Order>::new());
        let text = render(|out| {
            write_state(out, &state, |out, orders| {
                write_table(out, &orders_table(orders, SortSpec::default()))
            })
        });

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Order ID ▲"));
        assert!(lines[0].contains("Preço por unidade"));
        assert!(lines[1].starts_with("----------"));
    }

    #[test]
    fn right_aligned_columns_pad_on_the_left() {
        let orders = vec![Order {
            order_id: Some("7".into()),
            order_items: vec![OrderItem {
                product_name: Some("Caneca".into()),
                item_price: Some(Decimal::new(4990, 2)),
                quantity: Some(2),
                ..OrderItem::default()
            }],
            ..Order::default()
        }];

        let text = render(|out| write_table(out, &orders_table(&orders, SortSpec::default())));
        let row = text.lines().nth(2).expect("one row");
        // "Preço por unidade" is 17 chars wide, the price 8.
        assert!(row.contains(&format!("{:>17}", "R$ 49,90")));
        assert!(row.starts_with("7 "));
    }

    #[test]
    fn legacy_rows_show_free_shipping() {
        let orders = vec![LegacyOrder {
            item_name: Some("Caneca".into()),
            shipping: Some(Decimal::ZERO),
            item_price: Some(Decimal::from(50)),
            quantity: Some(1),
            ..LegacyOrder::default()
        }];
        let text = render(|out| write_table(out, &legacy_orders_table(&orders)));
        let row = text.lines().nth(2).expect("one row");
        assert!(row.contains("Grátis"));
        assert!(row.contains("R$ 50.00"));
    }

    #[test]
    fn loss_cards_are_marked() {
        let summary = SalesSummary {
            total_selling_fees: Some(Decimal::from(12)),
            approved_sales_count: Some(3),
            ..SalesSummary::default()
        };
        let text = render(|out| write_cards(out, &summary_cards(&summary)));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("  Receita Total Vendas Aprovadas"));
        assert!(lines[2].starts_with("! Total Tarifas de Vendas"));
        assert!(lines[2].ends_with("R$ 12,00"));
        assert!(lines[5].ends_with(" 3"));
    }
}
