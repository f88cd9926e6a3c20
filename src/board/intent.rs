use crate::drag::DragEvent;
use crate::mvi::Intent;
use crate::task::Task;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardIntent {
    /// Tasks fetched from a store (startup or refresh). Not written back.
    Load { tasks: Vec<Task> },
    /// Wholesale durable replacement.
    ReplaceAll { tasks: Vec<Task> },
    /// Append a fully built task. Content validation happens before dispatch.
    Add { task: Task },
    /// Remove by id; unknown ids still produce a (unchanged) durable write.
    Delete { id: String },
    Drag(DragEvent),
}

impl Intent for BoardIntent {}
