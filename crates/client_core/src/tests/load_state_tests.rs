use super::*;

fn network_error() -> FetchError {
    FetchError::transport("/api/orders/db", "connection refused")
}

#[test]
fn starts_loading_without_a_ticket() {
    let loader = Loader::<Vec<u32>>::new();
    assert!(loader.state().is_loading());
    assert_eq!(loader.latest_ticket(), None);
}

#[test]
fn empty_result_becomes_ready_without_error() {
    let mut loader = Loader::<Vec<u32>>::new();
    let ticket = loader.begin();
    assert!(loader.complete(ticket, Ok(Vec::new())));
    assert_eq!(loader.state(), &LoadState::Ready(Vec::new()));
    assert_eq!(loader.state().error(), None);
}

#[test]
fn failure_shows_the_generic_message_only() {
    let mut loader = Loader::<Vec<u32>>::new();
    let ticket = loader.begin();
    assert!(loader.complete(ticket, Err(network_error())));
    assert_eq!(
        loader.state(),
        &LoadState::Failed("Erro ao carregar os dados".to_string())
    );
    assert!(loader.state().ready().is_none());
}

#[test]
fn new_request_hides_previous_terminal_state() {
    let mut loader = Loader::new();
    let first = loader.begin();
    loader.complete(first, Ok(vec![1]));
    assert!(loader.state().is_ready());

    loader.begin();
    assert!(loader.state().is_loading());
}

#[test]
fn stale_response_cannot_overwrite_newer_state() {
    let mut loader = Loader::new();
    let older = loader.begin();
    let newer = loader.begin();
    assert!(older < newer);

    assert!(loader.complete(newer, Ok(vec![2])));
    assert!(!loader.complete(older, Ok(vec![1])));
    assert_eq!(loader.state(), &LoadState::Ready(vec![2]));
}

#[test]
fn stale_response_does_not_settle_a_pending_request() {
    let mut loader = Loader::new();
    let older = loader.begin();
    let newer = loader.begin();

    assert!(!loader.complete(older, Err(network_error())));
    assert!(loader.state().is_loading());

    assert!(loader.complete(newer, Ok(vec![3])));
    assert_eq!(loader.state().ready(), Some(&vec![3]));
}

#[test]
fn a_ticket_settles_at_most_once() {
    let mut loader = Loader::new();
    let ticket = loader.begin();
    assert!(loader.complete(ticket, Ok(vec![1])));
    assert!(!loader.complete(ticket, Err(network_error())));
    assert_eq!(loader.into_state(), LoadState::Ready(vec![1]));
}
