use std::time::Duration;

use client_core::{LoadState, Settings};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use views::{legacy_orders_table, orders_table, row_count, summary_cards};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{
        events::UiEvent,
        orchestration::dispatch_backend_command,
        reducer::{DashboardState, Tab},
    },
    ui::{cards::show_cards, tables::show_table},
};

const LOADING_TEXT: &str = "Carregando...";

pub struct DashboardApp {
    state: DashboardState,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
}

impl DashboardApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        settings: &Settings,
    ) -> Self {
        let mut app = Self {
            state: DashboardState::new(settings),
            cmd_tx,
            ui_rx,
        };
        for cmd in app.state.initial_commands() {
            app.dispatch(cmd);
        }
        app
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        if let Some(unsent) = dispatch_backend_command(&self.cmd_tx, cmd, &mut self.state.status)
        {
            self.state.command_not_sent(unsent);
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.state.apply(event);
        }
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("dashboard_tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for tab in Tab::ALL {
                    ui.selectable_value(&mut self.state.tab, tab, tab.label());
                }
                ui.separator();
                if ui.button("Atualizar").clicked() {
                    if let Some(cmd) = self.state.refresh_current_tab() {
                        self.dispatch(cmd);
                    }
                }
            });
        });
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        if self.state.status.is_empty() {
            return;
        }
        egui::TopBottomPanel::bottom("dashboard_status").show(ctx, |ui| {
            ui.label(&self.state.status);
        });
    }

    fn show_summary_filter(&mut self, ui: &mut egui::Ui) {
        let mut apply = false;
        ui.horizontal(|ui| {
            ui.label("Data inicial");
            let start = ui.add(
                egui::TextEdit::singleline(&mut self.state.filter.start_input)
                    .hint_text("dd/mm/aaaa")
                    .desired_width(100.0),
            );
            ui.label("Data final");
            let end = ui.add(
                egui::TextEdit::singleline(&mut self.state.filter.end_input)
                    .hint_text("dd/mm/aaaa")
                    .desired_width(100.0),
            );
            ui.label("Status");
            let status = ui.add(
                egui::TextEdit::singleline(&mut self.state.filter.status).desired_width(80.0),
            );

            let submitted = [start, end, status]
                .iter()
                .any(|field| field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)));
            apply = ui.button("Aplicar filtro").clicked() || submitted;
        });

        if apply {
            if let Some(cmd) = self.state.request_sales_summary() {
                self.dispatch(cmd);
            }
        }
    }

    fn show_content(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| match self.state.tab {
            Tab::Orders => {
                ui.heading(Tab::Orders.label());
                let sort = self.state.orders_sort;
                show_state(ui, self.state.orders.state(), |ui, orders| {
                    ui.small(format!("{} itens", row_count(orders)));
                    show_table(ui, "orders_table", &orders_table(orders, sort));
                });
            }
            Tab::LegacyOrders => {
                ui.heading(Tab::LegacyOrders.label());
                show_state(ui, self.state.legacy_orders.state(), |ui, orders| {
                    show_table(ui, "legacy_orders_table", &legacy_orders_table(orders));
                });
            }
            Tab::SalesSummary => {
                ui.heading(Tab::SalesSummary.label());
                self.show_summary_filter(ui);
                ui.separator();
                show_state(ui, self.state.summary.state(), |ui, summary| {
                    show_cards(ui, &summary_cards(summary));
                });
            }
        });
    }
}

fn show_state<T>(ui: &mut egui::Ui, state: &LoadState<T>, content: impl FnOnce(&mut egui::Ui, &T)) {
    match state {
        LoadState::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(LOADING_TEXT);
            });
        }
        LoadState::Failed(message) => {
            let color = ui.visuals().error_fg_color;
            ui.colored_label(color, message);
        }
        LoadState::Ready(data) => content(ui, data),
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_top_bar(ctx);
        self.show_status_bar(ctx);
        self.show_content(ctx);

        let waiting = self.state.orders.state().is_loading()
            || self.state.legacy_orders.state().is_loading()
            || self.state.summary.state().is_loading();
        ctx.request_repaint_after(Duration::from_millis(if waiting { 50 } else { 250 }));
    }
}
