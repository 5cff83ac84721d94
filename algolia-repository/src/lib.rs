//! # Algolia Repository
//!
//! This crate provides a small client for the Algolia REST API. It includes
//! definitions for errors and configuration, the `AlgoliaTransport` interface
//! with a `reqwest` implementation, the batch writer and search executor, and
//! the response mapper that turns raw JSON into typed results.

pub mod batch;
pub mod config;
pub mod errors;
pub mod http;
pub mod interfaces;
pub mod mapper;
pub mod search;
pub mod service;
pub mod types;
pub mod utils;

pub use config::AlgoliaConfig;
pub use errors::AlgoliaError;
pub use http::HttpTransport;
pub use interfaces::AlgoliaTransport;
pub use service::AlgoliaService;
pub use types::{ApiPath, Credentials};

/// HTTP method type used by `AlgoliaTransport`.
pub use reqwest::Method;
