//! In-memory task server used by unit tests

use std::sync::Mutex;

use super::error::{ApiError, Result};
use super::{Task, TaskApi, TaskDraft, TaskId};

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    List,
    Create(TaskDraft),
    Replace(Task),
    Update(TaskId, TaskDraft),
    Delete(TaskId),
}

#[derive(Default)]
struct State {
    tasks: Vec<Task>,
    next_id: i64,
    requests: Vec<Request>,
    failing: bool,
    next_response: Option<Task>,
}

/// Behaves like the real service and records every request it receives.
#[derive(Default)]
pub struct MockApi {
    state: Mutex<State>,
}

impl MockApi {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks
            .iter()
            .filter_map(|t| match t.id {
                TaskId::Num(n) => Some(n),
                TaskId::Text(_) | TaskId::Other(_) => None,
            })
            .max()
            .unwrap_or(0);
        Self {
            state: Mutex::new(State {
                tasks,
                next_id,
                ..Default::default()
            }),
        }
    }

    /// Every subsequent request fails with a 503 until reset.
    pub fn set_failing(&self, failing: bool) {
        self.state.lock().unwrap().failing = failing;
    }

    /// Overrides the body of the next create/replace/update response.
    pub fn respond_next_with(&self, task: Task) {
        self.state.lock().unwrap().next_response = Some(task);
    }

    pub fn requests(&self) -> Vec<Request> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn server_tasks(&self) -> Vec<Task> {
        self.state.lock().unwrap().tasks.clone()
    }

    fn record(&self, request: Request) -> Result<std::sync::MutexGuard<'_, State>> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request);
        if state.failing {
            return Err(ApiError::Status {
                status: 503,
                body: "unavailable".to_string(),
            });
        }
        Ok(state)
    }
}

fn not_found() -> ApiError {
    ApiError::Status {
        status: 404,
        body: "Task not found".to_string(),
    }
}

impl TaskApi for MockApi {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let state = self.record(Request::List)?;
        Ok(state.tasks.clone())
    }

    async fn create_task(&self, draft: &TaskDraft) -> Result<Task> {
        let mut state = self.record(Request::Create(draft.clone()))?;
        state.next_id += 1;
        let task = Task::new(state.next_id, &draft.title, draft.completed);
        state.tasks.push(task.clone());
        Ok(state.next_response.take().unwrap_or(task))
    }

    async fn replace_task(&self, task: &Task) -> Result<Task> {
        let mut state = self.record(Request::Replace(task.clone()))?;
        let slot = state
            .tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or_else(not_found)?;
        *slot = task.clone();
        Ok(state.next_response.take().unwrap_or_else(|| task.clone()))
    }

    async fn update_task(&self, id: &TaskId, draft: &TaskDraft) -> Result<Task> {
        let mut state = self.record(Request::Update(id.clone(), draft.clone()))?;
        let slot = state
            .tasks
            .iter_mut()
            .find(|t| t.id == *id)
            .ok_or_else(not_found)?;
        slot.title = draft.title.clone();
        slot.completed = draft.completed;
        let updated = slot.clone();
        Ok(state.next_response.take().unwrap_or(updated))
    }

    async fn delete_task(&self, id: &TaskId) -> Result<()> {
        let mut state = self.record(Request::Delete(id.clone()))?;
        let before = state.tasks.len();
        state.tasks.retain(|t| t.id != *id);
        if state.tasks.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}
