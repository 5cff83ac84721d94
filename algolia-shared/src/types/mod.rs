//! This module defines the core data structures used by the Algolia client.
//! It re-exports the batch, search and task status types.

pub mod batch;
pub mod search_query;
pub mod search_result;
pub mod task_status;

pub use batch::{Action, BatchAction, BatchResult, TaskId};
pub use search_query::SearchQuery;
pub use search_result::SearchResult;
pub use task_status::TaskStatus;
