use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::store::{StoreError, TaskSource, TaskStore};
use crate::task::Task;

/// Client for the board's HTTP store (`/api/tasks`).
pub struct HttpTaskStore {
    client: Client,
    endpoint: String,
}

impl HttpTaskStore {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, StoreError> {
        let endpoint = format!("{}/api/tasks", base_url.trim_end_matches('/'));
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| StoreError::Transport {
                url: endpoint.clone(),
                source,
            })?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport(&self, source: reqwest::Error) -> StoreError {
        StoreError::Transport {
            url: self.endpoint.clone(),
            source,
        }
    }
}

#[async_trait]
impl TaskSource for HttpTaskStore {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn load_all(&self) -> Result<Vec<Task>, StoreError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| self.transport(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                url: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.transport(e))?;
        serde_json::from_slice(&body).map_err(|source| StoreError::Decode {
            origin: self.endpoint.clone(),
            source,
        })
    }
}

#[async_trait]
impl TaskStore for HttpTaskStore {
    async fn save_all(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(tasks)
            .send()
            .await
            .map_err(|e| self.transport(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                url: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        tracing::debug!(endpoint = %self.endpoint, count = tasks.len(), "Tasks saved");
        Ok(())
    }
}
