//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are the discrete events the board reacts to: drag start,
/// hover, drop, cancel, as well as add, delete and reload.
pub trait Intent: Send + 'static {}
