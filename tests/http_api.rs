//! Integration tests for the HTTP task client
//!
//! An in-process axum server stands in for the remote API so the exact
//! methods, paths and bodies can be checked end to end.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, put};
use axum::{Json, Router};
use taskscreen::api::{ApiError, HttpTaskApi, Task, TaskApi, TaskDraft, TaskId};
use taskscreen::prefs::MemoryPrefStore;
use taskscreen::screen::{Outcome, TaskScreen};

#[derive(Clone, Default)]
struct Backend {
    inner: Arc<Mutex<BackendState>>,
}

#[derive(Default)]
struct BackendState {
    tasks: Vec<Task>,
    next_id: i64,
    log: Vec<String>,
}

impl Backend {
    fn log(&self) -> Vec<String> {
        self.inner.lock().unwrap().log.clone()
    }

    fn tasks(&self) -> Vec<Task> {
        self.inner.lock().unwrap().tasks.clone()
    }
}

async fn list(State(backend): State<Backend>) -> Json<Vec<Task>> {
    let mut state = backend.inner.lock().unwrap();
    state.log.push("GET /".to_string());
    Json(state.tasks.clone())
}

async fn create(State(backend): State<Backend>, Json(draft): Json<TaskDraft>) -> Json<Task> {
    let mut state = backend.inner.lock().unwrap();
    state.log.push(format!("POST / {}", draft.title));
    state.next_id += 1;
    let mut task = Task::new(state.next_id, &draft.title, draft.completed);
    task.extra
        .insert("owner".to_string(), serde_json::json!("sam"));
    state.tasks.push(task.clone());
    Json(task)
}

async fn replace(
    State(backend): State<Backend>,
    Json(task): Json<Task>,
) -> Result<Json<Task>, StatusCode> {
    let mut state = backend.inner.lock().unwrap();
    state.log.push(format!(
        "PUT / {} {} owner={}",
        task.id,
        task.completed,
        task.extra.get("owner").and_then(|v| v.as_str()).unwrap_or("-")
    ));
    let slot = state
        .tasks
        .iter_mut()
        .find(|t| t.id == task.id)
        .ok_or(StatusCode::NOT_FOUND)?;
    *slot = task.clone();
    Ok(Json(task))
}

async fn update(
    State(backend): State<Backend>,
    Path(id): Path<i64>,
    Json(draft): Json<TaskDraft>,
) -> Result<Json<Task>, StatusCode> {
    let mut state = backend.inner.lock().unwrap();
    state.log.push(format!(
        "PUT /{}/update {} {}",
        id, draft.title, draft.completed
    ));
    let slot = state
        .tasks
        .iter_mut()
        .find(|t| t.id == TaskId::Num(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    slot.title = draft.title;
    slot.completed = draft.completed;
    Ok(Json(slot.clone()))
}

async fn remove(State(backend): State<Backend>, Path(id): Path<i64>) -> StatusCode {
    let mut state = backend.inner.lock().unwrap();
    state.log.push(format!("DELETE /{}/delete", id));
    let before = state.tasks.len();
    state.tasks.retain(|t| t.id != TaskId::Num(id));
    if state.tasks.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    }
}

async fn spawn_server(backend: Backend) -> String {
    let app = Router::new()
        .route("/", get(list).post(create).put(replace))
        .route("/{id}/update", put(update))
        .route("/{id}/delete", delete(remove))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn setup() -> (Backend, HttpTaskApi) {
    let backend = Backend::default();
    let url = spawn_server(backend.clone()).await;
    let api = HttpTaskApi::new(&url, None).unwrap();
    (backend, api)
}

#[tokio::test]
async fn test_list_empty() {
    let (backend, api) = setup().await;
    assert!(api.list_tasks().await.unwrap().is_empty());
    assert_eq!(backend.log(), vec!["GET /"]);
}

#[tokio::test]
async fn test_create_posts_draft_and_returns_server_task() {
    let (backend, api) = setup().await;
    let task = api.create_task(&TaskDraft::pending("milk")).await.unwrap();
    assert_eq!(task.id, TaskId::Num(1));
    assert_eq!(task.title, "milk");
    assert!(!task.completed);
    assert_eq!(backend.log(), vec!["POST / milk"]);
    assert_eq!(api.list_tasks().await.unwrap(), vec![task]);
}

#[tokio::test]
async fn test_replace_puts_full_task_at_root() {
    let (backend, api) = setup().await;
    let task = api.create_task(&TaskDraft::pending("milk")).await.unwrap();

    let flipped = Task {
        completed: true,
        ..task
    };
    let updated = api.replace_task(&flipped).await.unwrap();
    assert!(updated.completed);
    assert_eq!(updated.extra["owner"], "sam");
    // Fields the client does not model go back to the server untouched
    assert_eq!(backend.log().last().unwrap(), "PUT / 1 true owner=sam");
    assert_eq!(backend.tasks()[0].extra["owner"], "sam");
}

#[tokio::test]
async fn test_update_puts_draft_to_id_path() {
    let (backend, api) = setup().await;
    api.create_task(&TaskDraft::pending("milk")).await.unwrap();

    let updated = api
        .update_task(&TaskId::Num(1), &TaskDraft::pending("oat milk"))
        .await
        .unwrap();
    assert_eq!(updated.title, "oat milk");
    assert!(!updated.completed);
    assert_eq!(backend.log().last().unwrap(), "PUT /1/update oat milk false");
}

#[tokio::test]
async fn test_delete_hits_id_path() {
    let (backend, api) = setup().await;
    api.create_task(&TaskDraft::pending("milk")).await.unwrap();

    api.delete_task(&TaskId::Num(1)).await.unwrap();
    assert_eq!(backend.log().last().unwrap(), "DELETE /1/delete");
    assert!(backend.tasks().is_empty());
}

#[tokio::test]
async fn test_non_success_status_is_error() {
    let (_backend, api) = setup().await;
    let err = api
        .update_task(&TaskId::Num(42), &TaskDraft::pending("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_http_error() {
    // Bind then drop to get a port with nothing listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpTaskApi::new(&format!("http://{}", addr), None).unwrap();
    let err = api.list_tasks().await.unwrap_err();
    assert!(matches!(err, ApiError::Http(_)));
}

#[tokio::test]
async fn test_screen_full_session_against_server() {
    let (backend, api) = setup().await;
    let mut screen = TaskScreen::new(api, MemoryPrefStore::default());
    screen.mount().await;
    assert!(screen.tasks().is_empty());

    screen.set_input("A");
    assert_eq!(screen.submit().await, Outcome::Applied);
    let id = screen.tasks()[0].id.clone();

    assert_eq!(screen.toggle_completed(&id).await, Outcome::Applied);
    assert!(screen.tasks()[0].completed);
    assert_eq!(screen.tasks()[0].extra["owner"], "sam");

    assert!(screen.begin_edit(&id));
    screen.set_input("B");
    assert_eq!(screen.submit().await, Outcome::Applied);
    assert_eq!(screen.tasks()[0].title, "B");
    assert!(!screen.tasks()[0].completed);
    assert_eq!(backend.tasks(), screen.tasks());

    assert_eq!(screen.delete_task(&id).await, Outcome::Applied);
    assert!(screen.tasks().is_empty());

    assert_eq!(
        backend.log(),
        vec![
            "GET /",
            "POST / A",
            "PUT / 1 true owner=sam",
            "PUT /1/update B false",
            "DELETE /1/delete",
        ]
    );
}

#[tokio::test]
async fn test_screen_keeps_state_when_server_rejects() {
    let (backend, api) = setup().await;
    let mut screen = TaskScreen::new(api, MemoryPrefStore::default());
    screen.set_input("A");
    screen.add_task().await;

    // Remove it behind the client's back; the delete now 404s
    backend.inner.lock().unwrap().tasks.clear();
    let id = screen.tasks()[0].id.clone();
    assert_eq!(screen.delete_task(&id).await, Outcome::Failed);
    assert_eq!(screen.tasks().len(), 1);
    assert!(screen.last_error().unwrap().contains("404"));
}
