use egui::{Layout, RichText, Ui};
use views::{Align as CellAlign, TableView};

fn aligned_cell(ui: &mut Ui, align: CellAlign, text: RichText) {
    match align {
        CellAlign::Left => {
            ui.label(text);
        }
        CellAlign::Right => {
            ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(text);
            });
        }
    }
}

/// Striped grid with one header row. An empty table still shows its header.
pub fn show_table(ui: &mut Ui, id: &str, table: &TableView) {
    egui::ScrollArea::both()
        .id_salt(id)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new((id, "grid"))
                .num_columns(table.headers.len())
                .spacing([14.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    for header in &table.headers {
                        let label = match header.sorted {
                            Some(direction) => format!("{} {}", header.label, direction.arrow()),
                            None => header.label.to_string(),
                        };
                        aligned_cell(ui, header.align, RichText::new(label).strong());
                    }
                    ui.end_row();

                    for row in &table.rows {
                        for (cell, header) in row.iter().zip(&table.headers) {
                            aligned_cell(ui, header.align, RichText::new(cell));
                        }
                        ui.end_row();
                    }
                });
        });
}
