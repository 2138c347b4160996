use rust_decimal::Decimal;
use shared::domain::SalesSummary;

use crate::format::{format_brl, format_count};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardTone {
    #[default]
    Neutral,
    /// Costs the seller pays; drawn as a warning.
    Loss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: String,
    pub tone: CardTone,
}

impl SummaryCard {
    fn money(title: &'static str, value: Option<Decimal>) -> Self {
        Self {
            title,
            value: format_brl(value),
            tone: CardTone::Neutral,
        }
    }

    fn loss(mut self) -> Self {
        self.tone = CardTone::Loss;
        self
    }
}

pub fn summary_cards(summary: &SalesSummary) -> Vec<SummaryCard> {
    vec![
        SummaryCard::money("Receita Total Vendas Aprovadas", summary.total_revenue),
        SummaryCard::money("Total Custo e Imposto", summary.total_cost_and_tax),
        SummaryCard::money("Total Tarifas de Vendas", summary.total_selling_fees).loss(),
        SummaryCard::money("Total Frete", summary.total_shipping).loss(),
        SummaryCard::money("Margem Contribuição", summary.total_contribution_margin),
        SummaryCard {
            title: "Quantidade Vendas Aprovadas",
            value: format_count(summary.approved_sales_count),
            tone: CardTone::Neutral,
        },
        SummaryCard::money("Ticket Médio por Venda", summary.average_ticket),
        SummaryCard::money(
            "Ticket Médio Margem Contribuição",
            summary.average_ticket_margin,
        ),
    ]
}
