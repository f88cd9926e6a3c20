//! Configuration loading for the server and the board client.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ClientConfig, Config, ServerConfig};
