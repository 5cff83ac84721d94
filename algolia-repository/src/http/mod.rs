//! HTTP implementation of the Algolia transport.
//!
//! This module provides a concrete implementation of `AlgoliaTransport`
//! backed by a pooled `reqwest` client.

mod hosts;
mod transport;

pub use hosts::{base_url, endpoint};
pub use transport::{HttpTransport, API_KEY_HEADER, APPLICATION_ID_HEADER};
