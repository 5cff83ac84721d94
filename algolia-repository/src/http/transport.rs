//! reqwest-backed transport.

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::config::AlgoliaConfig;
use crate::errors::AlgoliaError;
use crate::http::hosts;
use crate::interfaces::AlgoliaTransport;
use crate::types::{ApiPath, Credentials};

/// Header carrying the application ID.
pub const APPLICATION_ID_HEADER: &str = "X-Algolia-Application-Id";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-Algolia-API-Key";

/// HTTP transport for the Algolia REST API.
///
/// Holds one pooled `reqwest::Client` that may be shared by concurrent calls,
/// including calls made with different credentials. Credentials are passed per
/// request and never stored.
///
/// # Example
///
/// ```no_run
/// use algolia_repository::{AlgoliaConfig, AlgoliaTransport, Credentials, HttpTransport};
/// use algolia_repository::types::ApiPath;
/// use reqwest::Method;
/// use serde_json::json;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = HttpTransport::new(&AlgoliaConfig::default())?;
/// let credentials = Credentials::new("APPID", "admin-key")?;
/// let body = json!({"query": "t-shirt"});
/// let response = transport
///     .send(Method::POST, &ApiPath::index_query("products"), &credentials, Some(&body))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    host: Option<String>,
}

impl HttpTransport {
    /// Create a transport applying the configured timeout and host override.
    ///
    /// # Returns
    ///
    /// * `Ok(HttpTransport)` - A new transport instance
    /// * `Err(AlgoliaError::ConfigError)` - If the host override is invalid or
    ///   the HTTP client cannot be built
    pub fn new(config: &AlgoliaConfig) -> Result<Self, AlgoliaError> {
        if let Some(host) = config.host.as_deref() {
            // Application ID is irrelevant when an override is set.
            hosts::base_url("", Some(host))?;
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AlgoliaError::config(e.to_string()))?;

        info!(
            host = config.host.as_deref().unwrap_or("<application host>"),
            timeout_ms = config.timeout.as_millis() as u64,
            "Created Algolia HTTP transport"
        );

        Ok(Self {
            client,
            host: config.host.clone(),
        })
    }
}

#[async_trait]
impl AlgoliaTransport for HttpTransport {
    async fn send(
        &self,
        method: Method,
        path: &ApiPath,
        credentials: &Credentials,
        body: Option<&Value>,
    ) -> Result<Value, AlgoliaError> {
        let base = hosts::base_url(credentials.application_id(), self.host.as_deref())?;
        let url = hosts::endpoint(&base, path)?;

        debug!(
            method = %method,
            path = %path,
            application_id = %credentials.application_id(),
            "Sending Algolia request"
        );

        let mut request = self
            .client
            .request(method.clone(), url)
            .header(APPLICATION_ID_HEADER, credentials.application_id())
            .header(API_KEY_HEADER, credentials.api_key());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            error!(
                method = %method,
                path = %path,
                status = %status,
                body = %text,
                "Algolia request failed"
            );
            return Err(AlgoliaError::api(status.as_u16(), text));
        }

        debug!(method = %method, path = %path, status = %status, "Algolia request succeeded");

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| {
            AlgoliaError::parse(format!(
                "Response from {} is not valid JSON: {}",
                path, e
            ))
        })
    }
}
