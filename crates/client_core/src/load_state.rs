use shared::error::FetchError;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one fetch issued by a [`Loader`]. Tickets grow monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Tri-state holder for one view's data. Only the most recently issued
/// ticket may settle the state; results for older tickets are dropped.
#[derive(Debug)]
pub struct Loader<T> {
    state: LoadState<T>,
    latest: u64,
    settled: bool,
}

impl<T> Default for Loader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Loader<T> {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            latest: 0,
            settled: false,
        }
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn into_state(self) -> LoadState<T> {
        self.state
    }

    pub fn latest_ticket(&self) -> Option<RequestTicket> {
        (self.latest > 0).then_some(RequestTicket(self.latest))
    }

    /// Starts a new request. Whatever was shown before is replaced by
    /// `Loading` right away.
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        self.settled = false;
        self.state = LoadState::Loading;
        RequestTicket(self.latest)
    }

    pub fn complete(&mut self, ticket: RequestTicket, result: Result<T, FetchError>) -> bool {
        if ticket.0 != self.latest || self.settled {
            warn!(
                ticket = ticket.0,
                latest = self.latest,
                "discarding stale response"
            );
            return false;
        }

        self.state = match result {
            Ok(data) => LoadState::Ready(data),
            Err(err) => LoadState::Failed(err.user_message().to_string()),
        };
        self.settled = true;
        true
    }
}

#[cfg(test)]
#[path = "tests/load_state_tests.rs"]
mod tests;
