//! Error types for the DexPaprika client.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when talking to the DexPaprika API.
#[derive(Error, Debug)]
pub enum DexPaprikaError {
    /// Request parameters were rejected before anything was sent
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Resource not found (HTTP 404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded (HTTP 429)
    #[error("Rate limit exceeded{}", retry_after_suffix(.retry_after))]
    RateLimited { retry_after: Option<u64> },

    /// Any other 4xx response
    #[error("Client error (status {status}): {message}")]
    ClientError { status: u16, message: String },

    /// 5xx response
    #[error("Server error (status {status}): {message}")]
    ServerError { status: u16, message: String },

    /// Connection-level failure (refused, reset, DNS)
    #[error("HTTP transport failed: {0}")]
    Transport(String),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// The request could not be built (bad URL, bad header)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The blocking task running the request panicked or was cancelled
    #[error("Background task failed: {0}")]
    TaskFailed(String),

    /// A transient failure persisted through every retry
    #[error("Request failed after {attempts} attempts: {source}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: Box<DexPaprikaError>,
    },
}

fn retry_after_suffix(retry_after: &Option<u64>) -> String {
    match retry_after {
        Some(secs) => format!(" (retry after {}s)", secs),
        None => String::new(),
    }
}

impl DexPaprikaError {
    /// Whether the executor should try the request again.
    ///
    /// Only server errors and connection-level failures qualify. Client errors,
    /// including rate limiting, are the caller's to handle.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ServerError { .. } | Self::Transport(_) | Self::Timeout
        )
    }

    /// HTTP status attached to this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound(_) => Some(404),
            Self::RateLimited { .. } => Some(429),
            Self::ClientError { status, .. } | Self::ServerError { status, .. } => Some(*status),
            Self::RetriesExhausted { source, .. } => source.status(),
            _ => None,
        }
    }

    /// True for errors raised before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with DexPaprikaError
pub type DexPaprikaResult<T> = Result<T, DexPaprikaError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
