//! Configuration for the task runner.

mod settings;

pub use settings::{
    Settings, API_KEY_VAR, APP_ID_VAR, HOST_VAR, MAX_BATCH_SIZE_VAR, TASK_POLL_INTERVAL_MS_VAR,
    TASK_POLL_MAX_ATTEMPTS_VAR, TIMEOUT_SECS_VAR,
};
