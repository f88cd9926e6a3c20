use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by task stores and sources.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Network failure talking to a remote store
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Remote store answered with a non-success status
    #[error("Store at '{url}' responded with status {status}")]
    Status { url: String, status: u16 },

    /// Payload was not a valid task list
    #[error("Failed to decode tasks from '{origin}': {source}")]
    Decode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode tasks: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// True when the data was reachable but malformed.
    pub fn is_decode(&self) -> bool {
        matches!(self, StoreError::Decode { .. })
    }
}
