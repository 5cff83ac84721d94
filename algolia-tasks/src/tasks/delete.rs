use algolia_repository::{AlgoliaError, AlgoliaService};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::Connection;

/// Delete records from an index by objectID.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTask {
    #[serde(flatten)]
    pub connection: Connection,

    pub index_name: String,

    #[serde(alias = "objectIDs")]
    pub object_ids: Vec<String>,

    #[serde(default)]
    pub wait_for_task: bool,
}

/// Output of a `DeleteTask`: the objectIDs reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutput {
    pub object_ids: Vec<String>,
}

impl DeleteTask {
    #[instrument(skip_all, fields(index = %self.index_name, records = self.object_ids.len()))]
    pub async fn run(&self, service: &AlgoliaService) -> Result<DeleteOutput, AlgoliaError> {
        let batch = service
            .delete_objects(&self.index_name, &self.object_ids)
            .await?;

        if self.wait_for_task {
            match &batch.task_id {
                Some(task_id) => service.wait_for_task(&self.index_name, task_id).await?,
                None => warn!("No task id in batch response, not waiting"),
            }
        }

        info!(
            "Deleted {} record(s) from index '{}'",
            self.object_ids.len(),
            self.index_name
        );

        Ok(DeleteOutput {
            object_ids: batch.object_ids,
        })
    }
}
