//! Algolia transport trait definition.
//!
//! This module defines the abstract interface for sending authenticated
//! requests to the Algolia REST API.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::errors::AlgoliaError;
use crate::types::{ApiPath, Credentials};

/// Abstracts the HTTP layer used to reach Algolia.
///
/// Implementations are injected into `AlgoliaService` so the batch writer and
/// the search executor can be exercised against `HttpTransport` in production
/// and against recording or in-memory doubles in tests.
///
/// Implementations must be stateless per call: no retries and no state shared
/// between requests other than pooled connections.
#[async_trait]
pub trait AlgoliaTransport: Send + Sync {
    /// Send one authenticated request and decode the JSON response.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method
    /// * `path` - The REST API path, relative to the application's base URL
    /// * `credentials` - Application ID and API key sent as request headers
    /// * `body` - Optional JSON request body
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The decoded response body (`Value::Null` when empty)
    /// * `Err(AlgoliaError::Timeout)` - If no response arrived in time
    /// * `Err(AlgoliaError::ApiError)` - If the server answered with a non-2xx status
    /// * `Err(AlgoliaError::TransportError)` - If the request could not be delivered
    async fn send(
        &self,
        method: Method,
        path: &ApiPath,
        credentials: &Credentials,
        body: Option<&Value>,
    ) -> Result<Value, AlgoliaError>;
}
