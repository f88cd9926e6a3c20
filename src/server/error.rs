//! Error types and response mapping for the store server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::store::StoreError;

/// Errors returned by the `/api/tasks` handlers.
///
/// The display strings double as the public `{"error": ...}` message; the
/// underlying cause is only logged.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Body was not a JSON array of tasks
    #[error("Invalid tasks data")]
    InvalidPayload,

    #[error("Failed to read tasks")]
    ReadFailed(#[source] StoreError),

    #[error("Failed to parse tasks")]
    ParseFailed(#[source] StoreError),

    #[error("Failed to save tasks")]
    SaveFailed(#[source] StoreError),
}

impl ServerError {
    /// Classify a load failure: malformed data vs. unreadable file.
    pub fn from_load(err: StoreError) -> Self {
        if err.is_decode() {
            ServerError::ParseFailed(err)
        } else {
            ServerError::ReadFailed(err)
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::InvalidPayload => StatusCode::BAD_REQUEST,
            ServerError::ReadFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::ParseFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::SaveFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match &self {
            ServerError::InvalidPayload => tracing::debug!("Rejected invalid tasks payload"),
            ServerError::ReadFailed(e) | ServerError::ParseFailed(e) | ServerError::SaveFailed(e) => {
                tracing::error!(error = %e, "{}", self)
            }
        }

        let body = serde_json::json!({ "error": self.to_string() });
        (self.status_code(), Json(body)).into_response()
    }
}
