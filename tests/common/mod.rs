//! Shared test utilities: in-memory stores with failure injection.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use taskboard::store::{StoreError, TaskSource, TaskStore};
use taskboard::task::{ColumnId, Task};

pub fn task(id: &str, status: ColumnId) -> Task {
    Task::new(id, format!("{} content", id), status)
}

pub fn ids(tasks: &[Task]) -> Vec<String> {
    tasks.iter().map(|t| t.id.clone()).collect()
}

fn unavailable() -> StoreError {
    StoreError::Io {
        path: PathBuf::from("unavailable"),
        source: std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "store down"),
    }
}

/// In-memory store that records every save.
pub struct MemoryStore {
    tasks: Mutex<Vec<Task>>,
    saves: Mutex<Vec<Vec<Task>>>,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
}

impl MemoryStore {
    pub fn new(tasks: Vec<Task>) -> Arc<Self> {
        Arc::new(Self {
            tasks: Mutex::new(tasks),
            saves: Mutex::new(Vec::new()),
            fail_loads: AtomicBool::new(false),
            fail_saves: AtomicBool::new(false),
        })
    }

    pub fn unreachable() -> Arc<Self> {
        let store = Self::new(Vec::new());
        store.fail_loads.store(true, Ordering::SeqCst);
        store.fail_saves.store(true, Ordering::SeqCst);
        store
    }

    pub fn set_fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Every successful save, oldest first.
    pub fn saves(&self) -> Vec<Vec<Task>> {
        self.saves.lock().unwrap().clone()
    }

    pub fn persisted(&self) -> Vec<Task> {
        self.tasks.lock().unwrap().clone()
    }
}

#[async_trait]
impl TaskSource for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn load_all(&self) -> Result<Vec<Task>, StoreError> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        Ok(self.tasks.lock().unwrap().clone())
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn save_all(&self, tasks: &[Task]) -> Result<(), StoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        *self.tasks.lock().unwrap() = tasks.to_vec();
        self.saves.lock().unwrap().push(tasks.to_vec());
        Ok(())
    }
}

/// Read-only source with fixed content, or always failing.
pub struct StaticSource {
    tasks: Option<Vec<Task>>,
}

impl StaticSource {
    pub fn with(tasks: Vec<Task>) -> Arc<Self> {
        Arc::new(Self { tasks: Some(tasks) })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self { tasks: None })
    }
}

#[async_trait]
impl TaskSource for StaticSource {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn load_all(&self) -> Result<Vec<Task>, StoreError> {
        self.tasks.clone().ok_or_else(unavailable)
    }
}
