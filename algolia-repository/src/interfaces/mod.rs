//! Interface definitions for the Algolia client.
//!
//! This module defines the abstract `AlgoliaTransport` trait that allows
//! for dependency injection and swappable HTTP implementations.

mod algolia_transport;

pub use algolia_transport::AlgoliaTransport;
