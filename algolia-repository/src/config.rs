//! Configuration types for the Algolia client.

use std::time::Duration;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default delay between two task status polls.
pub const DEFAULT_TASK_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Default number of task status polls before giving up.
pub const DEFAULT_TASK_POLL_MAX_ATTEMPTS: u32 = 30;

/// Configuration for the Algolia client.
///
/// This struct controls how the transport reaches the API and the limits the
/// service enforces before sending anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgoliaConfig {
    /// Host override (e.g. a proxy or a local test server).
    ///
    /// When `None`, the host is derived from the application ID.
    /// A value without a scheme is treated as `https://`.
    pub host: Option<String>,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Maximum number of actions allowed in a single batch.
    ///
    /// Batches are never split; a larger batch is rejected before sending.
    /// Defaults to `None` (no limit).
    pub max_batch_size: Option<usize>,

    /// Delay between two task status polls in `wait_for_task`.
    pub task_poll_interval: Duration,

    /// Number of task status polls before `wait_for_task` gives up.
    pub task_poll_max_attempts: u32,
}

impl Default for AlgoliaConfig {
    fn default() -> Self {
        Self {
            host: None,
            timeout: DEFAULT_TIMEOUT,
            max_batch_size: None,
            task_poll_interval: DEFAULT_TASK_POLL_INTERVAL,
            task_poll_max_attempts: DEFAULT_TASK_POLL_MAX_ATTEMPTS,
        }
    }
}

impl AlgoliaConfig {
    /// Route all requests to `host` instead of the application's own host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reject batches with more than `max_batch_size` actions.
    pub fn with_max_batch_size(mut self, max_batch_size: usize) -> Self {
        self.max_batch_size = Some(max_batch_size);
        self
    }

    /// Set the task polling schedule used by `wait_for_task`.
    pub fn with_task_polling(mut self, interval: Duration, max_attempts: u32) -> Self {
        self.task_poll_interval = interval;
        self.task_poll_max_attempts = max_attempts;
        self
    }
}
