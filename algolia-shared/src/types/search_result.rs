//! Search result types.
//!
//! This module defines the response structure returned from a single-index
//! search.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Decoded single-index search response.
///
/// Hits are opaque records; no schema is imposed on indexed objects.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Total number of matching records.
    /// May be greater than the number of returned hits due to pagination.
    pub nb_hits: u64,

    /// Returned records, in the server's ranking order.
    pub hits: Vec<Map<String, Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nb_pages: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hits_per_page: Option<u64>,

    /// Server-side processing time in milliseconds.
    #[serde(
        rename = "processingTimeMS",
        skip_serializing_if = "Option::is_none"
    )]
    pub processing_time_ms: Option<u64>,

    /// The query text echoed by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl SearchResult {
    /// Create an empty search result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if no hits were returned.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Returns the number of hits in this page.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// The objectIDs of the returned hits, in ranking order.
    pub fn object_ids(&self) -> impl Iterator<Item = &str> {
        self.hits
            .iter()
            .filter_map(|hit| hit.get(crate::types::batch::OBJECT_ID)?.as_str())
    }
}
