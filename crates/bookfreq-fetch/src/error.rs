//! Error types for bookfreq-fetch.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error: server responded with status {status}")]
    Status { status: u16 },

    #[error("max retries exceeded ({count} attempts), last error: {last}")]
    MaxRetriesExceeded {
        count: u32,
        last:  Box<FetchError>,
    },

    #[error("response body is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl FetchError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Network(_) => true,
            FetchError::Status { status } => crate::core::is_retryable_status(*status),
            _ => false,
        }
    }
}
