use serde::{Deserialize, Serialize};

use super::{
    Connection, DeleteOutput, DeleteTask, IndexOutput, IndexTask, SearchOutput, SearchTask,
};
use crate::TaskError;

/// A task definition as read from JSON, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TaskDefinition {
    Index(IndexTask),
    Delete(DeleteTask),
    Search(SearchTask),
}

impl TaskDefinition {
    /// Decode a task definition.
    ///
    /// # Returns
    ///
    /// * `Ok(TaskDefinition)` - The decoded definition
    /// * `Err(TaskError::InputError)` - If the JSON is malformed or the `type` is unknown
    pub fn from_json(input: &str) -> Result<Self, TaskError> {
        serde_json::from_str(input)
            .map_err(|e| TaskError::input(format!("Invalid task definition: {}", e)))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Index(_) => "index",
            Self::Delete(_) => "delete",
            Self::Search(_) => "search",
        }
    }

    pub fn index_name(&self) -> &str {
        match self {
            Self::Index(task) => &task.index_name,
            Self::Delete(task) => &task.index_name,
            Self::Search(task) => &task.index_name,
        }
    }

    pub fn connection(&self) -> &Connection {
        match self {
            Self::Index(task) => &task.connection,
            Self::Delete(task) => &task.connection,
            Self::Search(task) => &task.connection,
        }
    }
}

/// The output of a completed task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskOutput {
    Index(IndexOutput),
    Delete(DeleteOutput),
    Search(SearchOutput),
}

impl TaskOutput {
    pub fn to_json_pretty(&self) -> Result<String, TaskError> {
        serde_json::to_string_pretty(self).map_err(|e| TaskError::output(e.to_string()))
    }
}

impl From<IndexOutput> for TaskOutput {
    fn from(output: IndexOutput) -> Self {
        Self::Index(output)
    }
}

impl From<DeleteOutput> for TaskOutput {
    fn from(output: DeleteOutput) -> Self {
        Self::Delete(output)
    }
}

impl From<SearchOutput> for TaskOutput {
    fn from(output: SearchOutput) -> Self {
        Self::Search(output)
    }
}
