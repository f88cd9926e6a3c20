//! Base trait for reducer state.

/// Marker trait for state objects.
///
/// States are cloneable snapshots, comparable for change detection, with a
/// meaningful empty default.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
