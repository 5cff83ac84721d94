//! Search executor.
//!
//! Runs a query against a single index. Search parameters are forwarded as the
//! request body without local validation; unknown or malformed parameters are
//! rejected by the server and surface as `AlgoliaError::ApiError`.

use algolia_shared::{SearchResult, TaskStatus};
use reqwest::Method;
use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::AlgoliaError;
use crate::interfaces::AlgoliaTransport;
use crate::mapper;
use crate::types::{ApiPath, Credentials};
use crate::utils;

/// Search `index_name` with the given parameters.
///
/// An empty parameter map is valid and lists all records with the server's
/// default pagination.
///
/// # Returns
///
/// * `Ok(SearchResult)` - Hit count and hits, in ranking order
/// * `Err(AlgoliaError::ValidationError)` - If `index_name` is empty (nothing is sent)
/// * `Err(AlgoliaError)` - Any transport error, unchanged
pub async fn search_single_index(
    transport: &dyn AlgoliaTransport,
    credentials: &Credentials,
    index_name: &str,
    params: &Map<String, Value>,
) -> Result<SearchResult, AlgoliaError> {
    utils::require_index_name(index_name)?;

    let path = ApiPath::index_query(index_name);
    let body = Value::Object(params.clone());

    debug!(index = %index_name, params = params.len(), "Searching index");

    let response = transport
        .send(Method::POST, &path, credentials, Some(&body))
        .await?;

    Ok(mapper::search_result(&response))
}

/// Fetch the status of an indexing task.
pub async fn task_status(
    transport: &dyn AlgoliaTransport,
    credentials: &Credentials,
    index_name: &str,
    task_id: i64,
) -> Result<TaskStatus, AlgoliaError> {
    utils::require_index_name(index_name)?;

    let path = ApiPath::index_task(index_name, task_id);
    let response = transport.send(Method::GET, &path, credentials, None).await?;

    Ok(mapper::task_status(&response))
}
