use algolia_repository::{AlgoliaError, AlgoliaService};
use algolia_shared::SearchQuery;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, instrument};

use super::Connection;

/// Search a single index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTask {
    #[serde(flatten)]
    pub connection: Connection,

    pub index_name: String,

    /// Algolia search parameters, forwarded as-is.
    #[serde(default)]
    pub params: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutput {
    pub nb_hits: u64,
    pub hits: Vec<Map<String, Value>>,
}

impl SearchTask {
    #[instrument(skip_all, fields(index = %self.index_name))]
    pub async fn run(&self, service: &AlgoliaService) -> Result<SearchOutput, AlgoliaError> {
        let query = SearchQuery::new(self.index_name.as_str()).with_params(self.params.clone());
        let result = service.search(&query).await?;

        let params = Value::Object(query.params);
        info!(
            "Searched Algolia index '{}' with params {}, found {} hits",
            self.index_name, params, result.nb_hits
        );

        Ok(SearchOutput {
            nb_hits: result.nb_hits,
            hits: result.hits,
        })
    }
}
