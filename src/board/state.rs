//! Owned board state.
//!
//! The task list is private: readers get slices and lane projections, and the
//! only way to change it is [`BoardState::replace_all`], which every add,
//! delete, hover and drop funnels through.

use crate::task::{ColumnId, Task};

/// How a replacement should be treated by persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Durability {
    /// Loaded from a store; nothing to write back.
    Loaded,
    /// Optimistic hover feedback, not persisted yet.
    Preview,
    /// Must be flushed to the store.
    Durable,
}

/// The single ordered task list backing all four lanes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardState {
    tasks: Vec<Task>,
    /// Bumped once per durable replacement.
    revision: u64,
}

/// One lane's tasks, in board order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView<'a> {
    pub column: ColumnId,
    pub tasks: Vec<&'a Task>,
}

impl BoardState {
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks, revision: 0 }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Number of durable replacements applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Lazy projection of one lane, recomputed on every call.
    pub fn view_column(&self, column: ColumnId) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |task| task.status == column)
    }

    /// All lanes in display order.
    pub fn columns(&self) -> Vec<ColumnView<'_>> {
        ColumnId::ALL
            .into_iter()
            .map(|column| ColumnView {
                column,
                tasks: self.view_column(column).collect(),
            })
            .collect()
    }

    pub(crate) fn replace_all(&mut self, tasks: Vec<Task>, durability: Durability) {
        self.tasks = tasks;
        if durability == Durability::Durable {
            self.revision += 1;
        }
    }
}
