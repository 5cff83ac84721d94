//! Batch write types.
//!
//! A batch is an ordered list of per-object actions sent to a single index in
//! one request. The server answers with the affected objectIDs in the same
//! order as the submitted actions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The record attribute Algolia uses as the primary key.
pub const OBJECT_ID: &str = "objectID";

/// The kind of write applied to a single record within a batch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// Add a record, replacing any record with the same objectID.
    /// The server generates an objectID when the body carries none.
    AddObject,
    /// Delete the record identified by the body's objectID.
    DeleteObject,
}

/// A single entry of a batch request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchAction {
    pub action: Action,
    pub body: Map<String, Value>,
}

impl BatchAction {
    /// Add (or replace) the given record.
    pub fn add(object: Map<String, Value>) -> Self {
        Self {
            action: Action::AddObject,
            body: object,
        }
    }

    /// Delete the record with the given objectID.
    pub fn delete(object_id: impl Into<String>) -> Self {
        let mut body = Map::new();
        body.insert(OBJECT_ID.to_string(), Value::String(object_id.into()));
        Self {
            action: Action::DeleteObject,
            body,
        }
    }

    /// The objectID carried by the body, if any.
    pub fn object_id(&self) -> Option<&str> {
        self.body.get(OBJECT_ID).and_then(Value::as_str)
    }
}

/// Identifier of the asynchronous indexing task created by a write.
///
/// Single-cluster applications return one integer. Multi-cluster
/// applications return one task per index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum TaskId {
    Single(i64),
    PerIndex(BTreeMap<String, i64>),
}

impl TaskId {
    /// Resolve the task to wait on for `index_name`.
    ///
    /// A single task id applies to every index.
    pub fn for_index(&self, index_name: &str) -> Option<i64> {
        match self {
            TaskId::Single(id) => Some(*id),
            TaskId::PerIndex(ids) => ids.get(index_name).copied(),
        }
    }
}

/// Result of a batch write.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BatchResult {
    /// Affected objectIDs, positionally aligned with the submitted actions.
    #[serde(rename = "objectIDs")]
    pub object_ids: Vec<String>,

    /// The indexing task created by the write, when the server reported one.
    #[serde(rename = "taskID", skip_serializing_if = "Option::is_none")]
    pub task_id: Option<TaskId>,

    /// The full decoded response object.
    #[serde(skip)]
    pub raw: Map<String, Value>,
}

impl BatchResult {
    /// Returns the number of objectIDs reported by the server.
    pub fn len(&self) -> usize {
        self.object_ids.len()
    }

    /// Returns true if the server reported no objectIDs.
    pub fn is_empty(&self) -> bool {
        self.object_ids.is_empty()
    }
}
