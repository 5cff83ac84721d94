//! # Algolia Shared
//!
//! This crate defines the data structures exchanged with the Algolia REST API
//! and shared across the record tasks: batch actions and their results,
//! search queries and search results, and indexing task status.

pub mod types;

pub use types::batch::{Action, BatchAction, BatchResult, TaskId};
pub use types::search_query::SearchQuery;
pub use types::search_result::SearchResult;
pub use types::task_status::TaskStatus;
