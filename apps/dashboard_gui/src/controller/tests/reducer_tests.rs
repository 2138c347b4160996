use rust_decimal::Decimal;
use views::{OrderColumn, SortDirection};

use super::*;

fn state() -> DashboardState {
    DashboardState::new(&Settings::default())
}

fn summary_ticket(cmd: &BackendCommand) -> client_core::RequestTicket {
    match cmd {
        BackendCommand::FetchSalesSummary { ticket, .. } => *ticket,
        other => panic!("expected a summary fetch, got {other:?}"),
    }
}

#[test]
fn startup_requests_every_view_and_shows_loading() {
    let mut state = state();
    let commands = state.initial_commands();

    let names: Vec<&str> = commands.iter().map(BackendCommand::name).collect();
    assert_eq!(
        names,
        vec!["fetch_orders", "fetch_legacy_orders", "fetch_sales_summary"]
    );
    assert!(state.orders.state().is_loading());
    assert!(state.legacy_orders.state().is_loading());
    assert!(state.summary.state().is_loading());
}

#[test]
fn settings_seed_sort_and_status() {
    let mut settings = Settings::default();
    settings.set_order_by("revenue");
    settings.set_direction("desc");
    settings.set_summary_status("shipped");

    let mut state = DashboardState::new(&settings);
    assert_eq!(state.orders_sort.column, OrderColumn::Revenue);
    assert_eq!(state.orders_sort.direction, SortDirection::Desc);

    match state.request_sales_summary() {
        Some(BackendCommand::FetchSalesSummary { query, .. }) => {
            assert_eq!(query.status, "shipped");
            assert_eq!(query.start_date, None);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn filter_accepts_displayed_and_iso_dates() {
    let filter = SummaryFilter {
        start_input: "01/02/2024".into(),
        end_input: " 2024-02-29 ".into(),
        status: String::new(),
    };
    let query = filter.to_query().expect("valid filter");
    assert_eq!(query.start_date, NaiveDate::from_ymd_opt(2024, 2, 1));
    assert_eq!(query.end_date, NaiveDate::from_ymd_opt(2024, 2, 29));
    assert_eq!(query.status, "paid");
}

#[test]
fn invalid_filter_keeps_summary_and_reports_status() {
    let mut state = state();
    let first = state.request_sales_summary().expect("default filter is valid");
    state.apply(UiEvent::SalesSummaryLoaded {
        ticket: summary_ticket(&first),
        result: Ok(SalesSummary::default()),
    });

    state.filter.end_input = "31/02/2024".into();
    assert!(state.request_sales_summary().is_none());
    assert_eq!(state.status, FilterError::InvalidEndDate.message());
    assert!(state.summary.state().is_ready());
}

#[test]
fn latest_filter_wins_when_results_arrive_out_of_order() {
    let mut state = state();
    state.filter.start_input = "2024-01-01".into();
    let older = state.request_sales_summary().expect("command");
    state.filter.start_input = "2024-06-01".into();
    let newer = state.request_sales_summary().expect("command");

    state.apply(UiEvent::SalesSummaryLoaded {
        ticket: summary_ticket(&newer),
        result: Ok(SalesSummary {
            total_revenue: Some(Decimal::from(2)),
            ..SalesSummary::default()
        }),
    });
    state.apply(UiEvent::SalesSummaryLoaded {
        ticket: summary_ticket(&older),
        result: Ok(SalesSummary {
            total_revenue: Some(Decimal::from(1)),
            ..SalesSummary::default()
        }),
    });

    let shown = state.summary.state().ready().expect("ready");
    assert_eq!(shown.total_revenue, Some(Decimal::from(2)));
}

#[test]
fn refresh_targets_the_selected_tab() {
    let mut state = state();
    state.tab = Tab::LegacyOrders;
    let cmd = state.refresh_current_tab().expect("command");
    assert_eq!(cmd.name(), "fetch_legacy_orders");
}

#[test]
fn unsent_command_fails_its_view() {
    let mut state = state();
    let cmd = state.request_orders();
    state.command_not_sent(cmd);

    assert_eq!(state.orders.state().error(), Some("Erro ao carregar os dados"));
    assert!(state.legacy_orders.state().is_loading());
}

#[test]
fn info_events_update_the_status_line() {
    let mut state = state();
    state.apply(UiEvent::Info("Falha ao iniciar".into()));
    assert_eq!(state.status, "Falha ao iniciar");
}
