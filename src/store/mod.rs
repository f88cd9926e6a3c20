//! Task persistence collaborators.
//!
//! A [`TaskSource`] can only be read (the static snapshot fallback); a
//! [`TaskStore`] can also be overwritten. Both work on the whole list at
//! once: there is no partial update and no merge.

mod error;
mod file;
mod http;
mod snapshot;

pub use error::StoreError;
pub use file::FlatFileStore;
pub use http::HttpTaskStore;
pub use snapshot::SnapshotSource;

use async_trait::async_trait;

use crate::task::Task;

#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    async fn load_all(&self) -> Result<Vec<Task>, StoreError>;
}

#[async_trait]
pub trait TaskStore: TaskSource {
    /// Replace the persisted collection with `tasks`.
    async fn save_all(&self, tasks: &[Task]) -> Result<(), StoreError>;
}
