//! Error types for the Algolia client.
//!
//! This module provides a unified error type for all Algolia operations.

mod algolia_error;

pub use algolia_error::AlgoliaError;
