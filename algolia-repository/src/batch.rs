//! Batch writer.
//!
//! Sends an ordered list of record actions to one index in a single request.
//! The server's `objectIDs` are positionally aligned with the submitted
//! actions, so actions are never reordered, deduplicated or split.

use algolia_shared::{BatchAction, BatchResult};
use reqwest::Method;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::errors::AlgoliaError;
use crate::interfaces::AlgoliaTransport;
use crate::mapper;
use crate::types::{ApiPath, Credentials};
use crate::utils;

/// Build the `addObject` actions for the index operation.
pub fn add_actions(objects: Vec<Map<String, Value>>) -> Vec<BatchAction> {
    objects.into_iter().map(BatchAction::add).collect()
}

/// Build the `deleteObject` actions for the delete operation.
///
/// # Returns
///
/// * `Ok(Vec<BatchAction>)` - One action per objectID, in input order
/// * `Err(AlgoliaError::ValidationError)` - If any objectID is empty
pub fn delete_actions<S: AsRef<str>>(object_ids: &[S]) -> Result<Vec<BatchAction>, AlgoliaError> {
    object_ids
        .iter()
        .enumerate()
        .map(|(position, id)| -> Result<BatchAction, AlgoliaError> {
            utils::require_non_empty(&format!("objectIDs[{}]", position), id.as_ref())?;
            Ok(BatchAction::delete(id.as_ref()))
        })
        .collect()
}

/// Send a batch of actions to `index_name`.
///
/// An empty action list is still sent; the server answers with no objectIDs.
/// Partial failures reported by the server are returned as-is.
///
/// # Returns
///
/// * `Ok(BatchResult)` - The objectIDs and task created by the write
/// * `Err(AlgoliaError::ValidationError)` - If `index_name` is empty (nothing is sent)
/// * `Err(AlgoliaError)` - Any transport error, unchanged
pub async fn write_batch(
    transport: &dyn AlgoliaTransport,
    credentials: &Credentials,
    index_name: &str,
    actions: &[BatchAction],
) -> Result<BatchResult, AlgoliaError> {
    utils::require_index_name(index_name)?;

    let path = ApiPath::index_batch(index_name);
    let body = json!({ "requests": actions });

    debug!(index = %index_name, actions = actions.len(), "Writing batch");

    let response = transport
        .send(Method::POST, &path, credentials, Some(&body))
        .await?;

    Ok(mapper::batch_result(&response))
}
