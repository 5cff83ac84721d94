//! Indexing task status.

use serde::{Deserialize, Serialize};

/// State of an asynchronous indexing task.
///
/// Writes are acknowledged before they become searchable; a task is
/// `Published` once its changes are visible to search.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    Published,
    #[default]
    NotPublished,
}

impl TaskStatus {
    pub fn is_published(&self) -> bool {
        matches!(self, TaskStatus::Published)
    }
}
