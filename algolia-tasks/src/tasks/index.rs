use algolia_repository::{AlgoliaError, AlgoliaService};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, instrument, warn};

use super::Connection;

/// Add or replace records in an index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexTask {
    #[serde(flatten)]
    pub connection: Connection,

    pub index_name: String,

    /// Records to write. A record without `objectID` gets one from the server.
    pub objects: Vec<Map<String, Value>>,

    /// Block until the write is searchable.
    #[serde(default)]
    pub wait_for_task: bool,
}

/// Output of an `IndexTask`: the batch response as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexOutput {
    pub result: Map<String, Value>,
}

impl IndexTask {
    #[instrument(skip_all, fields(index = %self.index_name, records = self.objects.len()))]
    pub async fn run(&self, service: &AlgoliaService) -> Result<IndexOutput, AlgoliaError> {
        let batch = service
            .index_objects(&self.index_name, self.objects.clone())
            .await?;

        if self.wait_for_task {
            match &batch.task_id {
                Some(task_id) => service.wait_for_task(&self.index_name, task_id).await?,
                None => warn!("No task id in batch response, not waiting"),
            }
        }

        info!(
            "Indexed {} Algolia record(s) into index '{}'",
            self.objects.len(),
            self.index_name
        );

        Ok(IndexOutput { result: batch.raw })
    }
}
