// src/error.rs
use thiserror::Error;

/// Failures talking to the sports data API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {endpoint}")]
    Status { status: u16, endpoint: String },

    #[error("invalid JSON from {endpoint}: {source}")]
    Json {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Transport-level failure that did not come from reqwest (fixtures, worker panics).
    #[error("{0}")]
    Other(String),
}

/// Failures reading or writing local storage.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage JSON: {0}")]
    Json(#[from] serde_json::Error),
}
