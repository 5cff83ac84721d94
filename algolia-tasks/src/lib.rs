//! # Algolia Tasks
//!
//! Record tasks for an Algolia index: index records, delete records by
//! objectID, and search. Tasks are read as JSON definitions and run by the
//! [`TaskRunner`] against the Algolia REST API.
//!
//! ## Modules
//!
//! - [`config`]: Settings loaded from the environment
//! - [`tasks`]: Task definitions and their outputs
//! - [`runner`]: Credential resolution and task execution
//! - [`errors`]: Error types for the tasks

pub mod config;
pub mod errors;
pub mod runner;
pub mod tasks;

pub use config::Settings;
pub use errors::TaskError;
pub use runner::TaskRunner;
pub use tasks::{
    Connection, DeleteOutput, DeleteTask, IndexOutput, IndexTask, SearchOutput, SearchTask,
    TaskDefinition, TaskOutput,
};
