//! Error types for User Card

use thiserror::Error;

/// Why a fetch did not produce a record.
///
/// The card treats every variant the same way (keep the old record, log,
/// clear the loading flag). The split only exists for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport failure (DNS, connect, reset)
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-success status
    #[error("Unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    /// Body was not the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Response decoded but carried no results
    #[error("Response contained no results")]
    EmptyResults,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Result type alias using FetchError
pub type FetchResult<T> = Result<T, FetchError>;
