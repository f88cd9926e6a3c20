//! Flat JSON file store used by the HTTP server.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fs2::FileExt;

use crate::store::{StoreError, TaskSource, TaskStore};
use crate::task::Task;

/// Whole-collection store backed by a single pretty-printed JSON file.
///
/// A missing file reads as an empty board. Writes take an exclusive advisory
/// lock for the duration of the rewrite.
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    path: PathBuf,
}

impl FlatFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl TaskSource for FlatFileStore {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn load_all(&self) -> Result<Vec<Task>, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&content).map_err(|source| StoreError::Decode {
            origin: self.path.display().to_string(),
            source,
        })
    }
}

#[async_trait]
impl TaskStore for FlatFileStore {
    async fn save_all(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(tasks).map_err(StoreError::Encode)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_locked(&path, body.as_bytes()))
            .await
            .map_err(|e| self.io_error(std::io::Error::new(ErrorKind::Other, e)))?
            .map_err(|e| self.io_error(e))?;

        tracing::debug!(path = %self.path.display(), count = tasks.len(), "Tasks written");
        Ok(())
    }
}

fn write_locked(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(false)
        .open(path)?;
    file.lock_exclusive()?;

    let result = rewrite(&mut file, contents);
    let _ = FileExt::unlock(&file);
    result
}

fn rewrite(file: &mut File, contents: &[u8]) -> std::io::Result<()> {
    file.set_len(0)?;
    file.write_all(contents)?;
    file.sync_all()
}
