//! Task runner: resolves credentials and runs task definitions.

use std::sync::Arc;

use algolia_repository::{AlgoliaService, AlgoliaTransport, Credentials, HttpTransport};
use tracing::{error, info};

use crate::config::Settings;
use crate::tasks::{Connection, TaskDefinition, TaskOutput};
use crate::TaskError;

/// Runs task definitions against a shared transport.
///
/// A fresh `AlgoliaService` is opened for every task and dropped when the
/// task returns, whatever the outcome.
pub struct TaskRunner {
    transport: Arc<dyn AlgoliaTransport>,
    settings: Settings,
}

impl TaskRunner {
    /// Create a runner backed by the HTTP transport.
    ///
    /// # Returns
    ///
    /// * `Ok(TaskRunner)` - Ready to run tasks
    /// * `Err(TaskError::Algolia)` - If the transport cannot be built from `settings`
    pub fn new(settings: Settings) -> Result<Self, TaskError> {
        let transport = HttpTransport::new(&settings.client)?;
        Ok(Self::with_transport(Arc::new(transport), settings))
    }

    /// Create a runner with a custom transport.
    pub fn with_transport(transport: Arc<dyn AlgoliaTransport>, settings: Settings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    /// Open a client handle for `connection`.
    ///
    /// Each credential missing from the connection is taken from the settings.
    ///
    /// # Returns
    ///
    /// * `Err(TaskError::Algolia)` with a `ValidationError` - If no application ID
    ///   or API key is available from either source
    pub fn open(&self, connection: &Connection) -> Result<AlgoliaService, TaskError> {
        let application_id = connection
            .application_id
            .as_deref()
            .or(self.settings.application_id.as_deref())
            .unwrap_or_default();
        let api_key = connection
            .api_key
            .as_deref()
            .or(self.settings.api_key.as_deref())
            .unwrap_or_default();

        let credentials = Credentials::new(application_id, api_key)?;
        Ok(AlgoliaService::with_config(
            Arc::clone(&self.transport),
            credentials,
            self.settings.client.clone(),
        ))
    }

    /// Run one task definition to completion.
    pub async fn run(&self, definition: &TaskDefinition) -> Result<TaskOutput, TaskError> {
        let service = self.open(definition.connection())?;

        let result = match definition {
            TaskDefinition::Index(task) => task.run(&service).await.map(TaskOutput::from),
            TaskDefinition::Delete(task) => task.run(&service).await.map(TaskOutput::from),
            TaskDefinition::Search(task) => task.run(&service).await.map(TaskOutput::from),
        };

        match result {
            Ok(output) => {
                info!(
                    task = definition.kind(),
                    index = %definition.index_name(),
                    "Task completed"
                );
                Ok(output)
            }
            Err(e) => {
                error!(
                    task = definition.kind(),
                    index = %definition.index_name(),
                    sent = !e.is_local(),
                    error = %e,
                    "Task failed"
                );
                Err(e.into())
            }
        }
    }
}
