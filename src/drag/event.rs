use crate::task::ColumnId;

/// What the dragged card is currently over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// An empty stretch of a lane.
    Column(ColumnId),
    /// Another card, identified by task id.
    Task(String),
}

impl DropTarget {
    /// Resolve a raw droppable id.
    ///
    /// Lane identifiers win over task ids, matching how the board registers
    /// lanes and cards in the same droppable namespace.
    pub fn from_raw(raw: &str) -> Self {
        match raw.parse::<ColumnId>() {
            Ok(column) => DropTarget::Column(column),
            Err(_) => DropTarget::Task(raw.to_string()),
        }
    }

    pub fn task_id(&self) -> Option<&str> {
        match self {
            DropTarget::Task(id) => Some(id.as_str()),
            DropTarget::Column(_) => None,
        }
    }
}

/// Gesture events delivered by the input layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    Start { task_id: String },
    Over { target: DropTarget },
    /// `target` is `None` when the card was released outside any droppable.
    End { target: Option<DropTarget> },
    /// Keyboard escape or sensor abort; behaves like an end without target.
    Cancel,
}
