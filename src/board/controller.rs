//! Board controller: owns the model and decides when to persist.

use crate::board::intent::BoardIntent;
use crate::board::model::BoardModel;
use crate::board::reducer::BoardReducer;
use crate::board::state::{BoardState, ColumnView};
use crate::board::BoardError;
use crate::drag::{DragEvent, DragSession, DropTarget};
use crate::mvi::Reducer;
use crate::sync::PersistenceSync;
use crate::task::{generate_task_id, ColumnId, Task};

/// Single-threaded owner of the board.
///
/// Every method takes `&mut self` and runs to completion, so mutations never
/// interleave. The in-memory state is updated before the save is queued and
/// nothing here waits on the store.
pub struct BoardController {
    model: BoardModel,
    sync: PersistenceSync,
}

impl BoardController {
    pub fn new(sync: PersistenceSync, tasks: Vec<Task>) -> Self {
        let model = BoardReducer::reduce(BoardModel::default(), BoardIntent::Load { tasks });
        Self { model, sync }
    }

    /// Load from the store (with fallback) and build the controller.
    pub async fn start(sync: PersistenceSync) -> Self {
        let tasks = sync.load().await;
        Self::new(sync, tasks)
    }

    pub fn board(&self) -> &BoardState {
        &self.model.board
    }

    pub fn session(&self) -> &DragSession {
        &self.model.session
    }

    pub fn view_column(&self, column: ColumnId) -> impl Iterator<Item = &Task> + '_ {
        self.model.board.view_column(column)
    }

    pub fn columns(&self) -> Vec<ColumnView<'_>> {
        self.model.board.columns()
    }

    pub fn flushes_issued(&self) -> u64 {
        self.sync.flushes_issued()
    }

    /// Append a new task to the end of the list.
    ///
    /// # Errors
    /// Returns [`BoardError::EmptyContent`] when `content` is blank; nothing
    /// is created or saved in that case.
    pub fn add_task(&mut self, content: &str, status: ColumnId) -> Result<Task, BoardError> {
        if content.trim().is_empty() {
            return Err(BoardError::EmptyContent);
        }

        let mut id = generate_task_id();
        while self.model.board.contains(&id) {
            id = generate_task_id();
        }

        let task = Task::new(id, content, status);
        tracing::info!(task_id = %task.id, column = %status, "Task added");
        self.dispatch(BoardIntent::Add { task: task.clone() });
        Ok(task)
    }

    /// Remove a task. Unknown ids are not an error.
    pub fn delete_task(&mut self, id: &str) {
        if !self.model.board.contains(id) {
            tracing::debug!(task_id = %id, "Delete of unknown task");
        }
        self.dispatch(BoardIntent::Delete { id: id.to_string() });
    }

    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.dispatch(BoardIntent::ReplaceAll { tasks });
    }

    /// Re-read the board from the store (with fallback). Not written back.
    ///
    /// When no source can be read the current board is kept; an empty list
    /// here would be written over the store by the next change.
    pub async fn refresh(&mut self) {
        match self.sync.try_load().await {
            Some(tasks) => self.dispatch(BoardIntent::Load { tasks }),
            None => tracing::warn!(count = self.model.board.len(), "Refresh failed, keeping current board"),
        }
    }

    /// Open a drag session. Returns false when `task_id` is not on the board.
    pub fn drag_start(&mut self, task_id: &str) -> bool {
        self.dispatch(BoardIntent::Drag(DragEvent::Start {
            task_id: task_id.to_string(),
        }));

        let started = self.model.session.active_task() == Some(task_id);
        if started {
            tracing::debug!(task_id = %task_id, "Drag started");
        } else {
            tracing::debug!(task_id = %task_id, "Drag start ignored, task not found");
        }
        started
    }

    pub fn drag_over(&mut self, target: DropTarget) {
        self.dispatch(BoardIntent::Drag(DragEvent::Over { target }));
    }

    pub fn drag_end(&mut self, target: Option<DropTarget>) {
        if let Some(active) = self.model.session.active_task() {
            tracing::debug!(task_id = %active, drop_target = ?target, "Drag ended");
        }
        self.dispatch(BoardIntent::Drag(DragEvent::End { target }));
    }

    pub fn drag_cancel(&mut self) {
        self.dispatch(BoardIntent::Drag(DragEvent::Cancel));
    }

    /// Wait for every queued save to be attempted.
    pub async fn settle(&self) {
        self.sync.settle().await;
    }

    fn dispatch(&mut self, intent: BoardIntent) {
        let before = self.model.board.revision();
        let model = std::mem::take(&mut self.model);
        self.model = BoardReducer::reduce(model, intent);

        if self.model.board.revision() != before {
            self.sync.flush(self.model.board.tasks().to_vec());
        }
    }
}
