use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::store::{StoreError, TaskSource};
use crate::task::Task;

/// Read-only JSON snapshot, consulted only when the primary store is
/// unreachable at startup.
///
/// Unlike [`FlatFileStore`](crate::store::FlatFileStore) a missing file is
/// an error here: there is nothing to fall back to.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    path: PathBuf,
}

impl SnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TaskSource for SnapshotSource {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    async fn load_all(&self) -> Result<Vec<Task>, StoreError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;

        serde_json::from_str(&content).map_err(|source| StoreError::Decode {
            origin: self.path.display().to_string(),
            source,
        })
    }
}
