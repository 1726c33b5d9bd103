//! reqwest-backed implementation of the task API

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::error::{ApiError, Result};
use super::{Task, TaskApi, TaskDraft, TaskId};

#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    http: Client,
    base_url: Url,
}

impl HttpTaskApi {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;

        let mut builder =
            Client::builder().user_agent(concat!("taskscreen/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn task_url(&self, id: &TaskId, action: &str) -> Result<Url> {
        task_url(&self.base_url, id, action)
    }
}

fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut raw = raw.trim().to_string();
    if !raw.ends_with('/') {
        raw.push('/');
    }
    let url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::InvalidUrl(raw));
    }
    Ok(url)
}

/// `{base}/{id}/{action}`, with the id percent-encoded as one path segment.
fn task_url(base: &Url, id: &TaskId, action: &str) -> Result<Url> {
    let mut url = base.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(base.to_string()))?;
        segments
            .pop_if_empty()
            .push(&id.to_string())
            .push(action);
    }
    Ok(url)
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    Ok(check_status(response).await?.json::<T>().await?)
}

impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        debug!("GET {}", self.base_url);
        let response = self.http.get(self.base_url.clone()).send().await?;
        read_json(response).await
    }

    async fn create_task(&self, draft: &TaskDraft) -> Result<Task> {
        debug!("POST {} title={:?}", self.base_url, draft.title);
        let response = self
            .http
            .post(self.base_url.clone())
            .json(draft)
            .send()
            .await?;
        read_json(response).await
    }

    async fn replace_task(&self, task: &Task) -> Result<Task> {
        debug!("PUT {} id={} completed={}", self.base_url, task.id, task.completed);
        let response = self
            .http
            .put(self.base_url.clone())
            .json(task)
            .send()
            .await?;
        read_json(response).await
    }

    async fn update_task(&self, id: &TaskId, draft: &TaskDraft) -> Result<Task> {
        let url = self.task_url(id, "update")?;
        debug!("PUT {} title={:?}", url, draft.title);
        let response = self.http.put(url).json(draft).send().await?;
        read_json(response).await
    }

    async fn delete_task(&self, id: &TaskId) -> Result<()> {
        let url = self.task_url(id, "delete")?;
        debug!("DELETE {}", url);
        let response = self.http.delete(url).send().await?;
        check_status(response).await?;
        Ok(())
    }
}
