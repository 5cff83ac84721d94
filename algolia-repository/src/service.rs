//! Algolia service implementation.
//!
//! This module provides the client handle application code uses to write
//! records to and search an Algolia index.

use std::sync::Arc;

use algolia_shared::{BatchAction, BatchResult, SearchQuery, SearchResult, TaskId, TaskStatus};
use serde_json::{Map, Value};
use tokio::time::sleep;
use tracing::debug;

use crate::batch;
use crate::config::AlgoliaConfig;
use crate::errors::AlgoliaError;
use crate::interfaces::AlgoliaTransport;
use crate::search;
use crate::types::Credentials;
use crate::utils;

/// The client handle for one set of credentials.
///
/// This is the high-level API that application code should use. It validates
/// input, enforces the configured batch limit, and delegates to the batch
/// writer and the search executor over an `AlgoliaTransport`. The transport may
/// be shared between handles; the credentials live exactly as long as the
/// handle.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use algolia_repository::{AlgoliaConfig, AlgoliaService, Credentials, HttpTransport};
/// use algolia_shared::SearchQuery;
/// use serde_json::json;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = AlgoliaConfig::default();
/// let transport = Arc::new(HttpTransport::new(&config)?);
/// let service = AlgoliaService::new(transport, Credentials::new("APPID", "admin-key")?);
///
/// let record = json!({"objectID": "prod_123", "name": "Black T-shirt"});
/// let written = service
///     .index_objects("products", vec![record.as_object().unwrap().clone()])
///     .await?;
/// if let Some(task_id) = &written.task_id {
///     service.wait_for_task("products", task_id).await?;
/// }
///
/// let found = service
///     .search(&SearchQuery::new("products").with_text("Black T-shirt"))
///     .await?;
/// println!("{} hits", found.nb_hits);
/// # Ok(())
/// # }
/// ```
pub struct AlgoliaService {
    transport: Arc<dyn AlgoliaTransport>,
    credentials: Credentials,
    config: AlgoliaConfig,
}

impl AlgoliaService {
    /// Create a new AlgoliaService with default configuration.
    ///
    /// The default configuration has no batch size limit.
    pub fn new(transport: Arc<dyn AlgoliaTransport>, credentials: Credentials) -> Self {
        Self {
            transport,
            credentials,
            config: AlgoliaConfig::default(),
        }
    }

    /// Create a new AlgoliaService with custom configuration.
    pub fn with_config(
        transport: Arc<dyn AlgoliaTransport>,
        credentials: Credentials,
        config: AlgoliaConfig,
    ) -> Self {
        Self {
            transport,
            credentials,
            config,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Check if batch size exceeds the configured limit.
    fn validate_batch_size(&self, size: usize) -> Result<(), AlgoliaError> {
        if let Some(max) = self.config.max_batch_size {
            if size > max {
                return Err(AlgoliaError::batch_size_exceeded(size, max));
            }
        }
        Ok(())
    }

    /// Send an ordered batch of actions to `index_name` in one request.
    ///
    /// # Returns
    ///
    /// * `Ok(BatchResult)` - objectIDs aligned with `actions`, and the task created
    /// * `Err(AlgoliaError::ValidationError)` - If `index_name` is empty
    /// * `Err(AlgoliaError::BatchSizeExceeded)` - If the batch is above the configured limit
    /// * `Err(AlgoliaError)` - Any transport error, unchanged
    pub async fn write_batch(
        &self,
        index_name: &str,
        actions: &[BatchAction],
    ) -> Result<BatchResult, AlgoliaError> {
        utils::require_index_name(index_name)?;
        self.validate_batch_size(actions.len())?;

        batch::write_batch(
            self.transport.as_ref(),
            &self.credentials,
            index_name,
            actions,
        )
        .await
    }

    /// Add or replace records.
    ///
    /// Records without an `objectID` get one generated by the server, reported
    /// at the same position in the result.
    pub async fn index_objects(
        &self,
        index_name: &str,
        objects: Vec<Map<String, Value>>,
    ) -> Result<BatchResult, AlgoliaError> {
        let actions = batch::add_actions(objects);
        self.write_batch(index_name, &actions).await
    }

    /// Delete records by objectID.
    ///
    /// # Returns
    ///
    /// * `Ok(BatchResult)` - The deleted objectIDs, in input order
    /// * `Err(AlgoliaError::ValidationError)` - If `index_name` or any objectID is empty
    /// * `Err(AlgoliaError)` - Any transport error, unchanged
    pub async fn delete_objects<S: AsRef<str>>(
        &self,
        index_name: &str,
        object_ids: &[S],
    ) -> Result<BatchResult, AlgoliaError> {
        utils::require_index_name(index_name)?;
        let actions = batch::delete_actions(object_ids)?;
        self.write_batch(index_name, &actions).await
    }

    /// Run a single-index search.
    ///
    /// Parameters are forwarded without local validation.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResult, AlgoliaError> {
        search::search_single_index(
            self.transport.as_ref(),
            &self.credentials,
            &query.index_name,
            &query.params,
        )
        .await
    }

    /// Fetch the status of an indexing task.
    pub async fn task_status(
        &self,
        index_name: &str,
        task_id: i64,
    ) -> Result<TaskStatus, AlgoliaError> {
        search::task_status(
            self.transport.as_ref(),
            &self.credentials,
            index_name,
            task_id,
        )
        .await
    }

    /// Poll until the task created by a write on `index_name` is published.
    ///
    /// Polls every `task_poll_interval`, at most `task_poll_max_attempts` times
    /// and at least once.
    /// Only the status is polled; the write itself is never resent.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Once the task is published
    /// * `Err(AlgoliaError::ValidationError)` - If `task_id` has no entry for `index_name`
    /// * `Err(AlgoliaError::Timeout)` - If the task is still pending after the last attempt
    /// * `Err(AlgoliaError)` - Any transport error, unchanged
    pub async fn wait_for_task(
        &self,
        index_name: &str,
        task_id: &TaskId,
    ) -> Result<(), AlgoliaError> {
        utils::require_index_name(index_name)?;
        let id = task_id.for_index(index_name).ok_or_else(|| {
            AlgoliaError::validation(format!("No task id reported for index '{}'", index_name))
        })?;

        // Always poll at least once.
        let attempts = self.config.task_poll_max_attempts.max(1);
        for attempt in 1..=attempts {
            if self.task_status(index_name, id).await?.is_published() {
                debug!(index = %index_name, task_id = id, attempt, "Task published");
                return Ok(());
            }
            debug!(index = %index_name, task_id = id, attempt, "Task not yet published");
            if attempt < attempts {
                sleep(self.config.task_poll_interval).await;
            }
        }

        Err(AlgoliaError::timeout(format!(
            "Task {} on index '{}' not published after {} attempts",
            id, index_name, attempts
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ApiPath;
    use async_trait::async_trait;
    use reqwest::Method;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::time::Duration;
    use tokio::sync::Mutex;

    /// Mock transport for testing.
    ///
    /// Answers batch requests by echoing each action's objectID (or generating
    /// one), search requests with `search_response`, and task requests from
    /// `task_statuses` in order.
    struct MockTransport {
        requests: Arc<Mutex<Vec<(Method, ApiPath, Option<Value>)>>>,
        search_response: Value,
        task_statuses: Mutex<VecDeque<&'static str>>,
        should_fail: bool,
    }

    impl MockTransport {
        fn new() -> Self {
            Self {
                requests: Arc::new(Mutex::new(Vec::new())),
                search_response: json!({"nbHits": 0, "hits": []}),
                task_statuses: Mutex::new(VecDeque::new()),
                should_fail: false,
            }
        }

        fn with_task_statuses(statuses: &[&'static str]) -> Self {
            let transport = Self::new();
            Self {
                task_statuses: Mutex::new(statuses.iter().copied().collect()),
                ..transport
            }
        }
    }

    #[async_trait]
    impl AlgoliaTransport for MockTransport {
        async fn send(
            &self,
            method: Method,
            path: &ApiPath,
            _credentials: &Credentials,
            body: Option<&Value>,
        ) -> Result<Value, AlgoliaError> {
            self.requests
                .lock()
                .await
                .push((method, path.clone(), body.cloned()));
            if self.should_fail {
                return Err(AlgoliaError::transport("Mock failure"));
            }

            match path.segments().get(3).map(String::as_str) {
                Some("batch") => {
                    let requests = body
                        .and_then(|b| b["requests"].as_array().cloned())
                        .unwrap_or_default();
                    let ids: Vec<String> = requests
                        .iter()
                        .enumerate()
                        .map(|(i, r)| {
                            r["body"]["objectID"]
                                .as_str()
                                .map(str::to_string)
                                .unwrap_or_else(|| format!("generated_{}", i))
                        })
                        .collect();
                    Ok(json!({"objectIDs": ids, "taskID": 99}))
                }
                Some("query") => Ok(self.search_response.clone()),
                Some("task") => {
                    let status = self
                        .task_statuses
                        .lock()
                        .await
                        .pop_front()
                        .unwrap_or("notPublished");
                    Ok(json!({"status": status}))
                }
                _ => Ok(Value::Null),
            }
        }
    }

    fn credentials() -> Credentials {
        Credentials::new("APPID", "admin-key").unwrap()
    }

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    fn service_with(transport: Arc<MockTransport>) -> AlgoliaService {
        AlgoliaService::new(transport, credentials())
    }

    #[tokio::test]
    async fn test_index_objects_aligns_object_ids() {
        let transport = Arc::new(MockTransport::new());
        let service = service_with(transport.clone());

        let objects = vec![
            object(json!({"objectID": "prod_001", "name": "Blue T-shirt"})),
            object(json!({"name": "Running Shoes"})),
            object(json!({"objectID": "prod_003", "name": "Socks"})),
        ];

        let result = service.index_objects("products", objects).await.unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result.object_ids[0], "prod_001");
        assert_eq!(result.object_ids[1], "generated_1");
        assert_eq!(result.object_ids[2], "prod_003");
        assert_eq!(result.task_id, Some(TaskId::Single(99)));
        assert_eq!(transport.requests.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_objects() {
        let transport = Arc::new(MockTransport::new());
        let service = service_with(transport.clone());

        let result = service
            .delete_objects("products", &["id_1", "id_2"])
            .await
            .unwrap();

        assert_eq!(result.object_ids, vec!["id_1", "id_2"]);
        let requests = transport.requests.lock().await;
        assert_eq!(
            requests[0].2.as_ref().unwrap()["requests"][1],
            json!({"action": "deleteObject", "body": {"objectID": "id_2"}})
        );
    }

    #[tokio::test]
    async fn test_empty_index_name_never_reaches_transport() {
        let transport = Arc::new(MockTransport::new());
        let service = service_with(transport.clone());

        let index = service.index_objects("", vec![object(json!({"a": 1}))]).await;
        let delete = service.delete_objects("", &["id_1"]).await;
        let search = service.search(&SearchQuery::new("")).await;

        for result in [index.map(|_| ()), delete.map(|_| ()), search.map(|_| ())] {
            assert!(matches!(
                result.unwrap_err(),
                AlgoliaError::ValidationError(_)
            ));
        }
        assert!(transport.requests.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_batch_size_exceeded_sends_nothing() {
        let transport = Arc::new(MockTransport::new());
        let config = AlgoliaConfig::default().with_max_batch_size(2);
        let service = AlgoliaService::with_config(transport.clone(), credentials(), config);

        let result = service
            .delete_objects("products", &["a", "b", "c"])
            .await;

        assert_eq!(
            result.unwrap_err(),
            AlgoliaError::BatchSizeExceeded { provided: 3, max: 2 }
        );
        assert!(transport.requests.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_batch_size_unlimited() {
        let transport = Arc::new(MockTransport::new());
        let service = service_with(transport.clone());

        let objects: Vec<_> = (0..5000)
            .map(|i| object(json!({"objectID": format!("obj_{}", i)})))
            .collect();

        let result = service.index_objects("products", objects).await.unwrap();

        assert_eq!(result.len(), 5000);
        assert_eq!(result.object_ids[4999], "obj_4999");
        assert_eq!(transport.requests.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_search_with_empty_params() {
        let transport = Arc::new(MockTransport {
            search_response: json!({
                "nbHits": 2,
                "hits": [{"objectID": "b"}, {"objectID": "a"}]
            }),
            ..MockTransport::new()
        });
        let service = service_with(transport.clone());

        let result = service.search(&SearchQuery::new("products")).await.unwrap();

        assert_eq!(result.nb_hits, 2);
        assert_eq!(result.object_ids().collect::<Vec<_>>(), vec!["b", "a"]);
        let requests = transport.requests.lock().await;
        assert_eq!(requests[0].1, ApiPath::index_query("products"));
        assert_eq!(requests[0].2, Some(json!({})));
    }

    #[tokio::test]
    async fn test_transport_errors_propagate() {
        let transport = Arc::new(MockTransport {
            should_fail: true,
            ..MockTransport::new()
        });
        let service = service_with(transport);

        let result = service.search(&SearchQuery::new("products")).await;

        assert_eq!(
            result.unwrap_err(),
            AlgoliaError::transport("Mock failure")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_for_task_polls_until_published() {
        let transport = Arc::new(MockTransport::with_task_statuses(&[
            "notPublished",
            "notPublished",
            "published",
        ]));
        let config = AlgoliaConfig::default().with_task_polling(Duration::from_millis(10), 5);
        let service = AlgoliaService::with_config(transport.clone(), credentials(), config);

        service
            .wait_for_task("products", &TaskId::Single(99))
            .await
            .unwrap();

        let requests = transport.requests.lock().await;
        assert_eq!(requests.len(), 3);
        assert!(requests
            .iter()
            .all(|(method, path, _)| *method == Method::GET
                && *path == ApiPath::index_task("products", 99)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_for_task_gives_up() {
        let transport = Arc::new(MockTransport::new());
        let config = AlgoliaConfig::default().with_task_polling(Duration::from_millis(10), 3);
        let service = AlgoliaService::with_config(transport.clone(), credentials(), config);

        let result = service.wait_for_task("products", &TaskId::Single(1)).await;

        assert!(matches!(result.unwrap_err(), AlgoliaError::Timeout(_)));
        assert_eq!(transport.requests.lock().await.len(), 3);
    }

    #[tokio::test]
    async fn test_wait_for_task_polls_once_with_zero_attempts() {
        let transport = Arc::new(MockTransport::with_task_statuses(&["published"]));
        let config = AlgoliaConfig::default().with_task_polling(Duration::from_millis(10), 0);
        let service = AlgoliaService::with_config(transport.clone(), credentials(), config);

        service
            .wait_for_task("products", &TaskId::Single(7))
            .await
            .unwrap();

        assert_eq!(transport.requests.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_wait_for_task_unknown_index() {
        let transport = Arc::new(MockTransport::new());
        let service = service_with(transport.clone());
        let task_id: TaskId = serde_json::from_value(json!({"users": 3})).unwrap();

        let result = service.wait_for_task("products", &task_id).await;

        assert!(matches!(
            result.unwrap_err(),
            AlgoliaError::ValidationError(_)
        ));
        assert!(transport.requests.lock().await.is_empty());
    }
}
