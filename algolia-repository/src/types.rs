//! Request types for Algolia operations.

use std::fmt;

use crate::errors::AlgoliaError;
use crate::utils;

/// Algolia credentials for a single client handle.
///
/// Both fields are required. The api key is never exposed through `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    application_id: String,
    api_key: String,
}

impl Credentials {
    /// Create credentials from an application ID and an API key.
    ///
    /// # Returns
    ///
    /// * `Ok(Credentials)` - If both values are non-empty
    /// * `Err(AlgoliaError::ValidationError)` - If either value is missing
    pub fn new(
        application_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, AlgoliaError> {
        let application_id = application_id.into();
        let api_key = api_key.into();
        utils::require_non_empty("applicationId", &application_id)?;
        utils::require_non_empty("apiKey", &api_key)?;
        Ok(Self {
            application_id: application_id.trim().to_string(),
            api_key,
        })
    }

    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("application_id", &self.application_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// A REST API path, kept as raw segments.
///
/// Segments are percent-encoded by the transport when joined to the base URL,
/// so index names may contain any character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPath {
    segments: Vec<String>,
}

impl ApiPath {
    const VERSION: &'static str = "1";
    const INDEXES: &'static str = "indexes";

    fn index(index_name: &str, rest: &[&str]) -> Self {
        let mut segments = vec![
            Self::VERSION.to_string(),
            Self::INDEXES.to_string(),
            index_name.to_string(),
        ];
        segments.extend(rest.iter().map(|s| s.to_string()));
        Self { segments }
    }

    /// `/1/indexes/{indexName}/batch`
    pub fn index_batch(index_name: &str) -> Self {
        Self::index(index_name, &["batch"])
    }

    /// `/1/indexes/{indexName}/query`
    pub fn index_query(index_name: &str) -> Self {
        Self::index(index_name, &["query"])
    }

    /// `/1/indexes/{indexName}/task/{taskID}`
    pub fn index_task(index_name: &str, task_id: i64) -> Self {
        Self::index(index_name, &["task", &task_id.to_string()])
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}
