//! Search query types.
//!
//! A query targets a single index and carries arbitrary Algolia search
//! parameters. Parameters are not interpreted locally; the server validates
//! them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Single-index search request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// The index to search.
    pub index_name: String,

    /// Search parameters (`query`, `hitsPerPage`, `filters`, `facets`, ...).
    /// An empty map lists all records with the server's default pagination.
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl SearchQuery {
    /// Create a query over `index_name` with no parameters.
    ///
    /// # Example
    ///
    /// ```
    /// use algolia_shared::SearchQuery;
    ///
    /// let query = SearchQuery::new("products").with_text("t-shirt").with_param("hitsPerPage", 5);
    /// assert_eq!(query.params["query"], "t-shirt");
    /// ```
    pub fn new(index_name: impl Into<String>) -> Self {
        Self {
            index_name: index_name.into(),
            params: Map::new(),
        }
    }

    /// Set the full-text query string.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_param("query", text.into())
    }

    /// Set an arbitrary search parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Replace all search parameters.
    pub fn with_params(mut self, params: Map<String, Value>) -> Self {
        self.params = params;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let query = SearchQuery::new("products")
            .with_text("Black T-shirt")
            .with_param("hitsPerPage", 5)
            .with_param("facets", json!(["color"]));

        assert_eq!(query.index_name, "products");
        assert_eq!(
            Value::Object(query.params),
            json!({"query": "Black T-shirt", "hitsPerPage": 5, "facets": ["color"]})
        );
    }

    #[test]
    fn test_params_default_to_empty() {
        let query: SearchQuery = serde_json::from_value(json!({"indexName": "products"})).unwrap();
        assert!(query.params.is_empty());
    }
}
