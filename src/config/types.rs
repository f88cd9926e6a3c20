use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

/// Settings for the flat-file HTTP store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the store server (host:port).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// JSON file holding the whole task list.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

/// Settings for the board client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the store server (scheme + host + port).
    #[serde(default = "default_store_url")]
    pub store_url: String,
    /// Read-only snapshot used when the store is unreachable at startup.
    #[serde(default = "default_fallback_file")]
    pub fallback_file: Option<PathBuf>,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3001".to_string()
}

fn default_data_file() -> PathBuf {
    PathBuf::from("public").join("data.json")
}

fn default_store_url() -> String {
    "http://127.0.0.1:3001".to_string()
}

fn default_fallback_file() -> Option<PathBuf> {
    Some(default_data_file())
}

fn default_timeout_seconds() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            data_file: default_data_file(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            store_url: default_store_url(),
            fallback_file: default_fallback_file(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
