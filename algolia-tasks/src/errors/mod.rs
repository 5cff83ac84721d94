//! Error types for the Algolia tasks.

use algolia_repository::AlgoliaError;
use thiserror::Error;

/// Errors that can occur while configuring or running a task.
#[derive(Error, Debug)]
pub enum TaskError {
    /// Configuration error (invalid environment value, transport setup).
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The task definition could not be read or decoded.
    #[error("Input error: {0}")]
    InputError(String),

    /// The task output could not be written.
    #[error("Output error: {0}")]
    OutputError(String),

    /// Error from the Algolia client.
    #[error("Algolia error: {0}")]
    Algolia(#[from] AlgoliaError),
}

impl TaskError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create an input error.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::InputError(msg.into())
    }

    /// Create an output error.
    pub fn output(msg: impl Into<String>) -> Self {
        Self::OutputError(msg.into())
    }

    /// The underlying Algolia error, if any.
    pub fn algolia(&self) -> Option<&AlgoliaError> {
        match self {
            Self::Algolia(e) => Some(e),
            _ => None,
        }
    }
}
