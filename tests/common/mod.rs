//! In-process HTTP stand-in for the remote task service.
//!
//! Serves the same four routes the real service exposes, backed by a
//! shared in-memory collection the tests can inspect and mutate directly.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};

use tasksync::model::task::{Task, TaskDraft};

pub type SharedState = Arc<Mutex<ServerState>>;

pub struct ServerState {
    pub tasks: Vec<Task>,
    pub next_id: u64,
}

/// Bind an ephemeral port, serve the task routes on it, and return the
/// base URL plus a handle to the backing collection.
pub async fn spawn_server(initial: Vec<Task>) -> (String, SharedState) {
    let next_id = initial.iter().map(|t| t.id + 1).max().unwrap_or(1);
    let state: SharedState = Arc::new(Mutex::new(ServerState {
        tasks: initial,
        next_id,
    }));

    let app = Router::new()
        .route("/api/tasks/all", get(list_tasks))
        .route("/api/tasks", post(create_task))
        .route("/api/tasks/{id}", put(update_task).delete(delete_task))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), state)
}

async fn list_tasks(State(state): State<SharedState>) -> Json<Vec<Task>> {
    Json(state.lock().unwrap().tasks.clone())
}

async fn create_task(State(state): State<SharedState>, Json(draft): Json<TaskDraft>) -> StatusCode {
    let mut state = state.lock().unwrap();
    let id = state.next_id;
    state.next_id += 1;
    state.tasks.push(Task {
        id,
        name: draft.name,
        done: draft.done,
    });
    StatusCode::CREATED
}

async fn update_task(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
    Json(draft): Json<TaskDraft>,
) -> StatusCode {
    let mut state = state.lock().unwrap();
    match state.tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => {
            task.name = draft.name;
            task.done = draft.done;
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_task(State(state): State<SharedState>, Path(id): Path<u64>) -> StatusCode {
    let mut state = state.lock().unwrap();
    let before = state.tasks.len();
    state.tasks.retain(|t| t.id != id);
    if state.tasks.len() < before {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            name: "Water plants".to_string(),
            done: false,
        },
        Task {
            id: 2,
            name: "Buy milk".to_string(),
            done: true,
        },
    ]
}
