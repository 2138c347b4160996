use egui::{Color32, RichText, Ui};
use views::{CardTone, SummaryCard};

const CARD_WIDTH: f32 = 260.0;

pub fn show_cards(ui: &mut Ui, cards: &[SummaryCard]) {
    ui.horizontal_wrapped(|ui| {
        for card in cards {
            show_card(ui, card);
        }
    });
}

fn show_card(ui: &mut Ui, card: &SummaryCard) {
    let accent = match card.tone {
        CardTone::Loss => ui.visuals().warn_fg_color,
        CardTone::Neutral => ui.visuals().strong_text_color(),
    };

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                ui.label(RichText::new(card.title).small().color(Color32::GRAY));
                ui.label(RichText::new(&card.value).heading().color(accent));
            });
        });
}
