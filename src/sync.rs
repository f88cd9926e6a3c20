//! Persistence sync.
//!
//! Durable board changes are handed to a single background writer and never
//! awaited by the board. Saves are applied in the order they were issued, and
//! lists still queued behind a slow save collapse into the newest one, so the
//! store always converges to the latest in-memory list. Failures are
//! logged and dropped: the in-memory board stays authoritative for the rest
//! of the session.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use crate::store::{TaskSource, TaskStore};
use crate::task::Task;

enum SyncCommand {
    Save(Vec<Task>),
    Settle { respond_to: oneshot::Sender<()> },
}

pub struct PersistenceSync {
    store: Arc<dyn TaskStore>,
    fallback: Option<Arc<dyn TaskSource>>,
    sender: mpsc::UnboundedSender<SyncCommand>,
    flushes_issued: u64,
}

impl PersistenceSync {
    /// Create the sync handle and spawn its writer task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        tokio::spawn(run_writer(store.clone(), receiver));

        Self {
            store,
            fallback: None,
            sender,
            flushes_issued: 0,
        }
    }

    /// Secondary read-only source used when the primary store cannot be read.
    pub fn with_fallback(mut self, fallback: Arc<dyn TaskSource>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Load the board: primary store, then the fallback, then empty.
    ///
    /// One attempt each, no retries; never fails.
    pub async fn load(&self) -> Vec<Task> {
        match self.try_load().await {
            Some(tasks) => tasks,
            None => {
                tracing::warn!("No source could be read, starting with an empty board");
                Vec::new()
            }
        }
    }

    /// Primary store, then the fallback. `None` when neither could be read,
    /// which is distinct from a source holding an empty board.
    pub async fn try_load(&self) -> Option<Vec<Task>> {
        match self.store.load_all().await {
            Ok(tasks) => {
                tracing::info!(source = self.store.name(), count = tasks.len(), "Tasks loaded");
                return Some(tasks);
            }
            Err(e) => {
                tracing::warn!(source = self.store.name(), error = %e, "Failed to load tasks");
            }
        }

        let fallback = self.fallback.as_ref()?;
        match fallback.load_all().await {
            Ok(tasks) => {
                tracing::info!(source = fallback.name(), count = tasks.len(), "Tasks loaded from fallback");
                Some(tasks)
            }
            Err(e) => {
                tracing::warn!(source = fallback.name(), error = %e, "Fallback load failed");
                None
            }
        }
    }

    /// Queue a full-list save. Returns immediately.
    pub fn flush(&mut self, tasks: Vec<Task>) {
        self.flushes_issued += 1;
        tracing::debug!(count = tasks.len(), flush = self.flushes_issued, "Flush queued");
        if self.sender.send(SyncCommand::Save(tasks)).is_err() {
            tracing::error!("Persistence writer stopped, save dropped");
        }
    }

    /// Number of flushes queued since creation.
    pub fn flushes_issued(&self) -> u64 {
        self.flushes_issued
    }

    /// Wait until every save queued so far has been attempted.
    pub async fn settle(&self) {
        let (respond_to, receiver) = oneshot::channel();
        if self.sender.send(SyncCommand::Settle { respond_to }).is_err() {
            return;
        }
        if receiver.await.is_err() {
            tracing::trace!("Persistence writer dropped settle request");
        }
    }
}

/// Drains the queue in batches. Within a batch only the newest pending list
/// is written; a settle request first writes whatever is pending ahead of it.
async fn run_writer(store: Arc<dyn TaskStore>, mut receiver: mpsc::UnboundedReceiver<SyncCommand>) {
    while let Some(first) = receiver.recv().await {
        let mut batch = vec![first];
        while let Ok(command) = receiver.try_recv() {
            batch.push(command);
        }

        let mut pending: Option<Vec<Task>> = None;
        for command in batch {
            match command {
                SyncCommand::Save(tasks) => {
                    if pending.replace(tasks).is_some() {
                        tracing::trace!("Queued save superseded by a newer list");
                    }
                }
                SyncCommand::Settle { respond_to } => {
                    if let Some(tasks) = pending.take() {
                        save(store.as_ref(), &tasks).await;
                    }
                    if respond_to.send(()).is_err() {
                        tracing::trace!("Settle response dropped (receiver gone)");
                    }
                }
            }
        }

        if let Some(tasks) = pending {
            save(store.as_ref(), &tasks).await;
        }
    }
}

async fn save(store: &dyn TaskStore, tasks: &[Task]) {
    if let Err(e) = store.save_all(tasks).await {
        tracing::warn!(
            store = store.name(),
            error = %e,
            "Failed to save tasks, keeping in-memory board"
        );
    }
}
