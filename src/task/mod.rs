//! Task entity shared by the board, the stores and the HTTP server.

mod column;

pub use column::{ColumnId, UnknownColumn};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single card on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque identifier, never changed after creation.
    pub id: String,
    pub content: String,
    pub status: ColumnId,
}

impl Task {
    pub fn new(id: impl Into<String>, content: impl Into<String>, status: ColumnId) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            status,
        }
    }
}

/// Generate a fresh task identifier (`task-<uuid>`).
pub fn generate_task_id() -> String {
    format!("task-{}", Uuid::new_v4().simple())
}
