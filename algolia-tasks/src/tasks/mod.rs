//! Record tasks: index, delete and search.
//!
//! Each task is a plain deserializable definition that runs against an
//! `AlgoliaService` opened by the `TaskRunner`.

mod definition;
mod delete;
mod index;
mod search;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use definition::{TaskDefinition, TaskOutput};
pub use delete::{DeleteOutput, DeleteTask};
pub use index::{IndexOutput, IndexTask};
pub use search::{SearchOutput, SearchTask};

/// Per-task credentials.
///
/// Missing fields fall back to the runner settings.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Connection {
    pub fn new(application_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            application_id: Some(application_id.into()),
            api_key: Some(api_key.into()),
        }
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("application_id", &self.application_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
