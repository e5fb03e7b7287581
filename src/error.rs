//! Error types

/// Failure reported by an item source.
///
/// Transport, status and decode failures are all normalised into
/// `FetchFailed` so the flow only ever sees a message.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("{0}")]
    FetchFailed(String),
}

impl FetchError {
    pub fn failed(message: impl Into<String>) -> Self {
        FetchError::FetchFailed(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            FetchError::FetchFailed(message) => message,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::FetchFailed(e.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::FetchFailed(format!("invalid item payload: {}", e))
    }
}

/// Invalid runtime configuration
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no item source: pass --url, set ITEMFLOW_URL, or use --offline")]
    MissingSource,
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("request count must be at least 1")]
    NoRequests,
    #[error("timeout must be greater than zero")]
    ZeroTimeout,
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
