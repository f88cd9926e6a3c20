pub mod board;
pub mod cli;
pub mod config;
pub mod drag;
pub mod logging;
pub mod mvi;
pub mod reconcile;
pub mod server;
pub mod store;
pub mod sync;
pub mod task;
