use thiserror::Error;

/// The only failure message a view ever shows, whatever went wrong.
pub const FETCH_FAILED_MESSAGE: &str = "Erro ao carregar os dados";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },
    #[error("{endpoint} answered with status {status}")]
    Status { endpoint: String, status: u16 },
    #[error("could not decode {endpoint} response: {message}")]
    Decode { endpoint: String, message: String },
}

impl FetchError {
    pub fn transport(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    pub fn decode(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        match self {
            Self::Transport { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Decode { endpoint, .. } => endpoint,
        }
    }

    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}
