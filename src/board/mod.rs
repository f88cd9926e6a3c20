//! Board state, its reducer and the controller that persists it.

mod controller;
mod intent;
mod model;
mod reducer;
mod state;

pub use controller::BoardController;
pub use intent::BoardIntent;
pub use model::BoardModel;
pub use reducer::BoardReducer;
pub use state::{BoardState, ColumnView, Durability};

use thiserror::Error;

/// Validation errors raised before any board mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Task content must not be empty")]
    EmptyContent,
}
