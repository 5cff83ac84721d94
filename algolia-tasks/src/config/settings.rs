//! Environment-driven settings for the task runner.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use algolia_repository::AlgoliaConfig;
use tracing::info;

use crate::TaskError;

/// Fallback application ID.
pub const APP_ID_VAR: &str = "ALGOLIA_APP_ID";
/// Fallback admin API key.
pub const API_KEY_VAR: &str = "ALGOLIA_API_KEY";
/// Host override.
pub const HOST_VAR: &str = "ALGOLIA_HOST";
/// Request timeout in seconds.
pub const TIMEOUT_SECS_VAR: &str = "ALGOLIA_TIMEOUT_SECS";
/// Maximum number of actions per batch.
pub const MAX_BATCH_SIZE_VAR: &str = "ALGOLIA_MAX_BATCH_SIZE";
/// Delay between task status polls, in milliseconds.
pub const TASK_POLL_INTERVAL_MS_VAR: &str = "ALGOLIA_TASK_POLL_INTERVAL_MS";
/// Number of task status polls before giving up.
pub const TASK_POLL_MAX_ATTEMPTS_VAR: &str = "ALGOLIA_TASK_POLL_MAX_ATTEMPTS";

/// Runner settings: fallback credentials and client configuration.
///
/// Credentials given on a task definition take precedence over the ones
/// loaded here.
#[derive(Clone, Default)]
pub struct Settings {
    pub application_id: Option<String>,
    pub api_key: Option<String>,
    pub client: AlgoliaConfig,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("application_id", &self.application_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("client", &self.client)
            .finish()
    }
}

impl Settings {
    /// Load settings from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ALGOLIA_APP_ID`: Fallback application ID
    /// - `ALGOLIA_API_KEY`: Fallback admin API key
    /// - `ALGOLIA_HOST`: Host override (default: derived from the application ID)
    /// - `ALGOLIA_TIMEOUT_SECS`: Request timeout in seconds (default: 30)
    /// - `ALGOLIA_MAX_BATCH_SIZE`: Maximum actions per batch (default: unlimited)
    /// - `ALGOLIA_TASK_POLL_INTERVAL_MS`: Task polling interval (default: 1000)
    /// - `ALGOLIA_TASK_POLL_MAX_ATTEMPTS`: Task polling attempts (default: 30)
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - Loaded settings
    /// * `Err(TaskError::ConfigError)` - If a numeric variable is not a valid number,
    ///   or `ALGOLIA_TASK_POLL_MAX_ATTEMPTS` is 0
    pub fn from_env() -> Result<Self, TaskError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TaskError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut client = AlgoliaConfig::default();
        if let Some(host) = lookup(HOST_VAR) {
            client = client.with_host(host);
        }
        if let Some(secs) = parse_var::<u64>(&lookup, TIMEOUT_SECS_VAR)? {
            client = client.with_timeout(Duration::from_secs(secs));
        }
        if let Some(max) = parse_var::<usize>(&lookup, MAX_BATCH_SIZE_VAR)? {
            client = client.with_max_batch_size(max);
        }
        let interval = parse_var::<u64>(&lookup, TASK_POLL_INTERVAL_MS_VAR)?
            .map(Duration::from_millis)
            .unwrap_or(client.task_poll_interval);
        let attempts = parse_var::<u32>(&lookup, TASK_POLL_MAX_ATTEMPTS_VAR)?
            .unwrap_or(client.task_poll_max_attempts);
        if attempts == 0 {
            return Err(TaskError::config(format!(
                "Invalid {} '0': at least one poll is required",
                TASK_POLL_MAX_ATTEMPTS_VAR
            )));
        }
        client = client.with_task_polling(interval, attempts);

        let settings = Self {
            application_id: lookup(APP_ID_VAR),
            api_key: lookup(API_KEY_VAR),
            client,
        };

        info!(
            application_id = settings.application_id.as_deref().unwrap_or("<per task>"),
            host = settings.client.host.as_deref().unwrap_or("<application host>"),
            timeout_secs = settings.client.timeout.as_secs(),
            max_batch_size = ?settings.client.max_batch_size,
            "Loaded settings"
        );

        Ok(settings)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, TaskError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| TaskError::config(format!("Invalid {} '{}': {}", key, raw, e)))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();

        assert!(settings.application_id.is_none());
        assert!(settings.api_key.is_none());
        assert_eq!(settings.client, AlgoliaConfig::default());
    }

    #[test]
    fn test_all_variables() {
        let settings = Settings::from_lookup(lookup_from(&[
            (APP_ID_VAR, "APPID"),
            (API_KEY_VAR, "admin-key"),
            (HOST_VAR, "http://localhost:8080"),
            (TIMEOUT_SECS_VAR, "5"),
            (MAX_BATCH_SIZE_VAR, "1000"),
            (TASK_POLL_INTERVAL_MS_VAR, "250"),
            (TASK_POLL_MAX_ATTEMPTS_VAR, "4"),
        ]))
        .unwrap();

        assert_eq!(settings.application_id.as_deref(), Some("APPID"));
        assert_eq!(settings.api_key.as_deref(), Some("admin-key"));
        assert_eq!(settings.client.host.as_deref(), Some("http://localhost:8080"));
        assert_eq!(settings.client.timeout, Duration::from_secs(5));
        assert_eq!(settings.client.max_batch_size, Some(1000));
        assert_eq!(settings.client.task_poll_interval, Duration::from_millis(250));
        assert_eq!(settings.client.task_poll_max_attempts, 4);
    }

    #[test]
    fn test_empty_values_are_unset() {
        let settings =
            Settings::from_lookup(lookup_from(&[(API_KEY_VAR, ""), (TIMEOUT_SECS_VAR, " ")]))
                .unwrap();

        assert!(settings.api_key.is_none());
        assert_eq!(settings.client.timeout, AlgoliaConfig::default().timeout);
    }

    #[test]
    fn test_invalid_number_fails_fast() {
        let result = Settings::from_lookup(lookup_from(&[(TIMEOUT_SECS_VAR, "soon")]));

        assert!(matches!(
            result.unwrap_err(),
            TaskError::ConfigError(msg) if msg.contains(TIMEOUT_SECS_VAR)
        ));
    }

    #[test]
    fn test_zero_poll_attempts_is_rejected() {
        let result = Settings::from_lookup(lookup_from(&[(TASK_POLL_MAX_ATTEMPTS_VAR, "0")]));

        assert!(matches!(
            result.unwrap_err(),
            TaskError::ConfigError(msg) if msg.contains(TASK_POLL_MAX_ATTEMPTS_VAR)
        ));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let settings = Settings::from_lookup(lookup_from(&[(API_KEY_VAR, "super-secret")])).unwrap();
        assert!(!format!("{:?}", settings).contains("super-secret"));
    }
}
