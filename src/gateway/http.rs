use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::gateway::{GatewayError, TaskGateway};
use crate::model::config::GatewayConfig;
use crate::model::task::{Task, TaskDraft};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// [`TaskGateway`] over HTTP.
///
/// Routes follow the service's REST shape: `GET {endpoint}/all` for the
/// full collection, `POST {endpoint}` to create, and `PUT`/`DELETE`
/// `{endpoint}/{id}` for a single task.
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
    endpoint: String,
}

impl HttpGateway {
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(HttpGateway {
            client,
            base_url: config.base_url.clone(),
            endpoint: config.endpoint.clone(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoint)
    }

    fn task_url(&self, id: u64) -> String {
        format!("{}{}/{}", self.base_url, self.endpoint, id)
    }

    async fn fetch_all(&self) -> Result<Vec<Task>, GatewayError> {
        let url = format!("{}/all", self.collection_url());
        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let tasks = serde_json::from_str(&body)?;
        Ok(tasks)
    }

    async fn post_create(&self, draft: &TaskDraft) -> Result<(), GatewayError> {
        self.client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn put_update(&self, id: u64, draft: &TaskDraft) -> Result<(), GatewayError> {
        self.client
            .put(self.task_url(id))
            .json(draft)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn send_delete(&self, id: u64) -> Result<(), GatewayError> {
        self.client
            .delete(self.task_url(id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl TaskGateway for HttpGateway {
    async fn list(&self) -> Vec<Task> {
        match self.fetch_all().await {
            Ok(tasks) => {
                debug!(count = tasks.len(), "fetched task list");
                tasks
            }
            Err(e) => {
                warn!("failed to fetch tasks: {e}");
                Vec::new()
            }
        }
    }

    async fn create(&self, draft: &TaskDraft) {
        if let Err(e) = self.post_create(draft).await {
            warn!("failed to create task: {e}");
        }
    }

    async fn update(&self, id: u64, draft: &TaskDraft) {
        if let Err(e) = self.put_update(id, draft).await {
            warn!(id, "failed to update task: {e}");
        }
    }

    async fn delete(&self, id: u64) {
        if let Err(e) = self.send_delete(id).await {
            warn!(id, "failed to delete task: {e}");
        }
    }
}
