//! Response mapping.
//!
//! Pure functions turning decoded Algolia responses into typed results. They
//! never fail: a missing or mistyped optional field yields its zero value.

use algolia_shared::{BatchResult, SearchResult, TaskId, TaskStatus};
use serde_json::{Map, Value};

/// Map a `batch` response.
///
/// `objectIDs` entries that are not strings are kept as their JSON text so the
/// result stays positionally aligned with the submitted actions.
pub fn batch_result(response: &Value) -> BatchResult {
    let raw = response.as_object().cloned().unwrap_or_default();

    let object_ids = raw
        .get("objectIDs")
        .and_then(Value::as_array)
        .map(|ids| ids.iter().map(json_text).collect())
        .unwrap_or_default();

    let task_id = raw.get("taskID").and_then(task_id);

    BatchResult {
        object_ids,
        task_id,
        raw,
    }
}

/// Map a single-index `query` response.
pub fn search_result(response: &Value) -> SearchResult {
    let empty = Map::new();
    let fields = response.as_object().unwrap_or(&empty);

    let hits = fields
        .get("hits")
        .and_then(Value::as_array)
        .map(|hits| {
            hits.iter()
                .filter_map(|hit| hit.as_object().cloned())
                .collect()
        })
        .unwrap_or_default();

    SearchResult {
        nb_hits: u64_field(fields, "nbHits").unwrap_or(0),
        hits,
        page: u64_field(fields, "page"),
        nb_pages: u64_field(fields, "nbPages"),
        hits_per_page: u64_field(fields, "hitsPerPage"),
        processing_time_ms: u64_field(fields, "processingTimeMS"),
        query: fields
            .get("query")
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}

/// Map a task status response.
pub fn task_status(response: &Value) -> TaskStatus {
    match response.get("status").and_then(Value::as_str) {
        Some("published") => TaskStatus::Published,
        _ => TaskStatus::NotPublished,
    }
}

fn task_id(value: &Value) -> Option<TaskId> {
    match value {
        Value::Number(n) => n.as_i64().map(TaskId::Single),
        Value::Object(ids) => Some(TaskId::PerIndex(
            ids.iter()
                .filter_map(|(index, id)| Some((index.clone(), id.as_i64()?)))
                .collect(),
        )),
        _ => None,
    }
}

fn u64_field(fields: &Map<String, Value>, name: &str) -> Option<u64> {
    fields.get(name).and_then(Value::as_u64)
}

fn json_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
