use super::event::DropTarget;

/// Drag session state machine.
///
/// Owned by the board model; the reconciliation functions only ever see the
/// active id and target by value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging {
        active: String,
        /// Last hover target seen during this gesture.
        hover: Option<DropTarget>,
    },
}

impl DragSession {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn active_task(&self) -> Option<&str> {
        match self {
            Self::Dragging { active, .. } => Some(active.as_str()),
            Self::Idle => None,
        }
    }

    pub fn hover(&self) -> Option<&DropTarget> {
        match self {
            Self::Dragging { hover, .. } => hover.as_ref(),
            Self::Idle => None,
        }
    }
}
