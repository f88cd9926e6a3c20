use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::server::error::ServerError;
use crate::server::health::health;
use crate::store::{FlatFileStore, TaskSource, TaskStore};
use crate::task::Task;

/// Shared handler state. The mutex serializes file access so a read never
/// observes a half-written rewrite.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<FlatFileStore>>,
}

impl AppState {
    pub fn new(store: FlatFileStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/tasks",
            get(list_tasks).post(save_tasks).put(save_tasks),
        )
        .with_state(state)
}

async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ServerError> {
    let store = state.store.lock().await;
    let tasks = store.load_all().await.map_err(ServerError::from_load)?;
    Ok(Json(tasks))
}

async fn save_tasks(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ServerError> {
    let tasks = parse_payload(&body)?;

    let store = state.store.lock().await;
    store.save_all(&tasks).await.map_err(ServerError::SaveFailed)?;
    tracing::info!(count = tasks.len(), "Task list replaced");

    Ok(Json(serde_json::json!({ "success": true })))
}

/// Accept only a JSON array whose elements are valid tasks.
fn parse_payload(body: &[u8]) -> Result<Vec<Task>, ServerError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ServerError::InvalidPayload)?;
    if !value.is_array() {
        return Err(ServerError::InvalidPayload);
    }
    serde_json::from_value(value).map_err(|_| ServerError::InvalidPayload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_must_be_an_array() {
        assert!(matches!(
            parse_payload(br#"{"id":"x"}"#),
            Err(ServerError::InvalidPayload)
        ));
        assert!(matches!(parse_payload(b"not json"), Err(ServerError::InvalidPayload)));
    }

    #[test]
    fn payload_elements_must_be_tasks() {
        let unknown_column = br#"[{"id":"a","content":"x","status":"archived"}]"#;
        assert!(matches!(
            parse_payload(unknown_column),
            Err(ServerError::InvalidPayload)
        ));
    }

    #[test]
    fn empty_array_is_accepted() {
        assert!(parse_payload(b"[]").unwrap().is_empty());
    }
}
