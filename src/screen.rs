//! TaskScreen - task cache, view state, and every user operation
//!
//! The local task list is a cache of server state. Each mutating operation
//! is one request; only the server's response is written back, and a failed
//! request is logged and leaves everything as it was.

use tracing::{debug, error};

use crate::api::{HttpTaskApi, Task, TaskApi, TaskDraft, TaskId};
use crate::config::Config;
use crate::filter::{filtered, Filter};
use crate::prefs::{self, FilePrefStore, KeyValueStore};

/// What an operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A request succeeded and its response was reconciled.
    Applied,
    /// Preconditions not met; no request was made.
    Skipped,
    /// The request failed; state is unchanged.
    Failed,
}

pub struct TaskScreen<A, S> {
    api: A,
    store: S,
    tasks: Vec<Task>,

    // View state
    input: String,
    edit_id: Option<TaskId>,
    filter: Filter,
    dark_mode: bool,
    last_error: Option<String>,
}

impl<A: TaskApi, S: KeyValueStore> TaskScreen<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            tasks: Vec::new(),
            input: String::new(),
            edit_id: None,
            filter: Filter::All,
            dark_mode: false,
            last_error: None,
        }
    }

    /// Startup: theme preference, then the task list.
    pub async fn mount(&mut self) {
        self.load_theme().await;
        self.refresh().await;
    }

    pub async fn load_theme(&mut self) {
        self.dark_mode = prefs::load_dark_mode(&self.store).await;
    }

    /// Flips the mode immediately and persists the new value.
    pub async fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        if let Err(e) = prefs::save_dark_mode(&self.store, self.dark_mode).await {
            error!("Error saving theme preference: {}", e);
        }
    }

    pub async fn refresh(&mut self) -> Outcome {
        match self.api.list_tasks().await {
            Ok(tasks) => {
                debug!("Fetched {} tasks", tasks.len());
                self.replace_all(tasks);
                self.succeeded()
            }
            Err(e) => self.failed("fetching tasks", e),
        }
    }

    pub async fn add_task(&mut self) -> Outcome {
        if self.input.trim().is_empty() {
            return Outcome::Skipped;
        }

        let draft = TaskDraft::pending(&self.input);
        match self.api.create_task(&draft).await {
            Ok(task) => {
                self.append(task);
                self.input.clear();
                self.succeeded()
            }
            Err(e) => self.failed("adding task", e),
        }
    }

    pub async fn toggle_completed(&mut self, id: &TaskId) -> Outcome {
        let Some(current) = self.find(id) else {
            return Outcome::Skipped;
        };

        let mut updated = current.clone();
        updated.completed = !updated.completed;
        match self.api.replace_task(&updated).await {
            Ok(task) => {
                self.replace_by_id(id, task);
                self.succeeded()
            }
            Err(e) => self.failed("updating task", e),
        }
    }

    /// Loads a task's title into the input and marks it as being edited.
    pub fn begin_edit(&mut self, id: &TaskId) -> bool {
        let Some(task) = self.find(id) else {
            return false;
        };
        self.input = task.title.clone();
        self.edit_id = Some(id.clone());
        true
    }

    pub fn cancel_edit(&mut self) {
        self.edit_id = None;
        self.input.clear();
    }

    /// Sends the input as the task's new title.
    ///
    /// The request always carries `completed: false`, so retitling a
    /// completed task also reopens it.
    pub async fn commit_edit(&mut self) -> Outcome {
        let Some(id) = self.edit_id.clone() else {
            return Outcome::Skipped;
        };
        if self.input.trim().is_empty() {
            return Outcome::Skipped;
        }

        let draft = TaskDraft::pending(&self.input);
        match self.api.update_task(&id, &draft).await {
            Ok(task) => {
                self.replace_by_id(&id, task);
                self.edit_id = None;
                self.input.clear();
                self.succeeded()
            }
            Err(e) => self.failed("updating task", e),
        }
    }

    /// The single submit control: commit an edit if one is active, else add.
    pub async fn submit(&mut self) -> Outcome {
        if self.edit_id.is_some() {
            self.commit_edit().await
        } else {
            self.add_task().await
        }
    }

    pub async fn delete_task(&mut self, id: &TaskId) -> Outcome {
        match self.api.delete_task(id).await {
            Ok(()) => {
                self.remove_by_id(id);
                self.succeeded()
            }
            Err(e) => self.failed("deleting task", e),
        }
    }

    // Reconciliation. These are the only places `tasks` is written.

    fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    fn append(&mut self, task: Task) {
        self.tasks.push(task);
    }

    fn replace_by_id(&mut self, id: &TaskId, task: Task) {
        for slot in self.tasks.iter_mut().filter(|t| t.id == *id) {
            *slot = task.clone();
        }
    }

    fn remove_by_id(&mut self, id: &TaskId) {
        self.tasks.retain(|t| t.id != *id);
    }

    fn succeeded(&mut self) -> Outcome {
        self.last_error = None;
        Outcome::Applied
    }

    fn failed(&mut self, action: &str, e: crate::api::ApiError) -> Outcome {
        error!("Error {}: {}", action, e);
        self.last_error = Some(format!("Error {}: {}", action, e));
        Outcome::Failed
    }
}

/// The screen as run by the binary: HTTP API plus on-disk preferences.
pub type LiveScreen = TaskScreen<HttpTaskApi, FilePrefStore>;

impl LiveScreen {
    pub fn open(config: &Config, api_url: Option<&str>) -> anyhow::Result<Self> {
        let api = HttpTaskApi::new(config.api_url(api_url), config.api.timeout())?;
        let store = FilePrefStore::open_default()?;
        Ok(TaskScreen::new(api, store))
    }
}

impl<A, S> TaskScreen<A, S> {
    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == *id)
    }

    /// The filtered view, recomputed on every call.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        filtered(&self.tasks, self.filter)
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: &str) {
        self.input = input.to_string();
    }

    pub fn edit_id(&self) -> Option<&TaskId> {
        self.edit_id.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.edit_id.is_some()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
