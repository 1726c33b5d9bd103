//! Remote task API: wire types and the client seam

mod client;
mod error;
#[cfg(test)]
pub(crate) mod mock;

pub use client::HttpTaskApi;
pub use error::{ApiError, Result};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::future::Future;

/// Server-assigned task identifier.
///
/// The server owns the format; any JSON number or string is accepted and
/// round-tripped unchanged. `Other` holds numbers outside `i64` (floats,
/// large unsigned values).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Num(i64),
    Text(String),
    Other(serde_json::Number),
}

impl TaskId {
    /// Matches a user-supplied identifier against the display form.
    /// Surrounding whitespace is ignored on both sides.
    pub fn matches(&self, identifier: &str) -> bool {
        let identifier = identifier.trim();
        match self {
            TaskId::Num(n) => identifier.parse::<i64>() == Ok(*n),
            TaskId::Text(s) => s.trim() == identifier,
            TaskId::Other(n) => n.to_string() == identifier,
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Num(n) => write!(f, "{}", n),
            TaskId::Text(s) => f.write_str(s),
            TaskId::Other(n) => write!(f, "{}", n),
        }
    }
}

impl From<i64> for TaskId {
    fn from(n: i64) -> Self {
        TaskId::Num(n)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    #[serde(alias = "text")]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    /// Server fields this client does not model. Sent back unchanged on a
    /// full replace so they are not wiped.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    pub fn new(id: impl Into<TaskId>, title: &str, completed: bool) -> Self {
        Self {
            id: id.into(),
            title: title.to_string(),
            completed,
            extra: Map::new(),
        }
    }
}

/// Request body for create and edit-commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub completed: bool,
}

impl TaskDraft {
    pub fn pending(title: &str) -> Self {
        Self {
            title: title.to_string(),
            completed: false,
        }
    }
}

/// The five endpoints of the remote task service.
///
/// Every call is a single request/response exchange; implementations do
/// not retry.
pub trait TaskApi {
    /// `GET /`
    fn list_tasks(&self) -> impl Future<Output = Result<Vec<Task>>> + Send;

    /// `POST /`
    fn create_task(&self, draft: &TaskDraft) -> impl Future<Output = Result<Task>> + Send;

    /// `PUT /` with the full task, id included.
    fn replace_task(&self, task: &Task) -> impl Future<Output = Result<Task>> + Send;

    /// `PUT /{id}/update`
    fn update_task(
        &self,
        id: &TaskId,
        draft: &TaskDraft,
    ) -> impl Future<Output = Result<Task>> + Send;

    /// `DELETE /{id}/delete`
    fn delete_task(&self, id: &TaskId) -> impl Future<Output = Result<()>> + Send;
}
