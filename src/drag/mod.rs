//! Drag session: the transient state between a drag's start and its end.

mod event;
mod session;

pub use event::{DragEvent, DropTarget};
pub use session::DragSession;
