//! Model-View-Intent primitives for the board.
//!
//! Every board mutation, whether it comes from a drag gesture or from an
//! explicit add/delete, flows through the same loop:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: owned snapshot of the board and the current drag session
//! - **Intent**: a discrete interaction event
//! - **Reducer**: pure function that computes the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
