//! Host resolution for the Algolia REST API.
//!
//! Every application has its own host derived from its application ID. A
//! configured override replaces it for all requests.

use url::Url;

use crate::errors::AlgoliaError;
use crate::types::ApiPath;

/// Domain serving every Algolia application.
const ALGOLIA_DOMAIN: &str = "algolia.net";

/// Resolve the base URL for an application.
///
/// # Arguments
///
/// * `application_id` - The Algolia application ID
/// * `host_override` - Optional host or URL replacing the application's host
///
/// # Returns
///
/// * `Ok(Url)` - `https://{application_id}.algolia.net`, or the override
/// * `Err(AlgoliaError)` - If the resulting URL is invalid
///
/// # Example
///
/// ```
/// use algolia_repository::http::base_url;
///
/// let url = base_url("LATENCY", None).unwrap();
/// assert_eq!(url.as_str(), "https://latency.algolia.net/");
///
/// let url = base_url("LATENCY", Some("localhost:8080")).unwrap();
/// assert_eq!(url.as_str(), "https://localhost:8080/");
/// ```
pub fn base_url(application_id: &str, host_override: Option<&str>) -> Result<Url, AlgoliaError> {
    match host_override {
        Some(host) => {
            let host = host.trim();
            let raw = if host.contains("://") {
                host.to_string()
            } else {
                format!("https://{}", host)
            };
            Url::parse(&raw)
                .map_err(|e| AlgoliaError::config(format!("Invalid host '{}': {}", host, e)))
        }
        None => {
            let raw = format!("https://{}.{}", application_id, ALGOLIA_DOMAIN);
            Url::parse(&raw).map_err(|e| {
                AlgoliaError::validation(format!(
                    "Invalid applicationId '{}': {}",
                    application_id, e
                ))
            })
        }
    }
}

/// Join an API path to a base URL, percent-encoding each segment.
///
/// Any path already present on the base URL (e.g. a proxy prefix) is kept.
pub fn endpoint(base: &Url, path: &ApiPath) -> Result<Url, AlgoliaError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| AlgoliaError::config(format!("Host '{}' cannot be a base URL", base)))?
        .pop_if_empty()
        .extend(path.segments());
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_from_application_id() {
        let url = base_url("APPID123", None).unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("appid123.algolia.net"));
    }

    #[test]
    fn test_base_url_override_keeps_scheme() {
        let url = base_url("APPID123", Some("http://127.0.0.1:7700")).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:7700/");
    }

    #[test]
    fn test_base_url_invalid_application_id() {
        let result = base_url("bad id", None);
        assert!(matches!(
            result.unwrap_err(),
            AlgoliaError::ValidationError(_)
        ));
    }

    #[test]
    fn test_base_url_invalid_override() {
        let result = base_url("APPID", Some("http://"));
        assert!(matches!(result.unwrap_err(), AlgoliaError::ConfigError(_)));
    }

    #[test]
    fn test_endpoint_encodes_index_name() {
        let base = base_url("APPID", None).unwrap();
        let url = endpoint(&base, &ApiPath::index_batch("my products/2024")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://appid.algolia.net/1/indexes/my%20products%2F2024/batch"
        );
    }

    #[test]
    fn test_endpoint_keeps_proxy_prefix() {
        let base = base_url("APPID", Some("http://proxy.internal/algolia/")).unwrap();
        let url = endpoint(&base, &ApiPath::index_query("products")).unwrap();
        assert_eq!(
            url.as_str(),
            "http://proxy.internal/algolia/1/indexes/products/query"
        );
    }
}
