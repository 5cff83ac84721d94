//! Algolia client error types.
//!
//! This module defines the unified error type for all Algolia operations,
//! covering local validation failures, transport failures and server
//! rejections.

use thiserror::Error;

/// Unified errors from Algolia operations.
///
/// Used by the `AlgoliaTransport` trait, the batch writer, the search executor
/// and `AlgoliaService`. Every error is surfaced to the caller unchanged; the
/// client never retries or reinterprets a failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AlgoliaError {
    /// A required field is missing or empty. Raised before any network call.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Batch size exceeds the configured maximum. Raised before any network call.
    #[error("Batch size {provided} exceeds maximum {max}")]
    BatchSizeExceeded { provided: usize, max: usize },

    /// Invalid client configuration (host override, HTTP client setup).
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// No response within the configured deadline.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// The server rejected the request. `message` is the response body verbatim.
    #[error("API error (status {status_code}): {message}")]
    ApiError { status_code: u16, message: String },

    /// Network-level failure (DNS, connection refused or reset).
    #[error("Transport error: {0}")]
    TransportError(String),

    /// A successful response carried a body that is not JSON.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl AlgoliaError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a batch size exceeded error.
    pub fn batch_size_exceeded(provided: usize, max: usize) -> Self {
        Self::BatchSizeExceeded { provided, max }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a timeout error.
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    /// Create an API error from a status code and the raw response body.
    pub fn api(status_code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status_code,
            message: message.into(),
        }
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::TransportError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Returns true if the error was raised locally, before anything was sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::BatchSizeExceeded { .. } | Self::ConfigError(_)
        )
    }

    /// The HTTP status code of a server rejection.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AlgoliaError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_builder() {
            Self::ConfigError(err.to_string())
        } else {
            Self::TransportError(err.to_string())
        }
    }
}
