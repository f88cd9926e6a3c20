use crate::board::state::BoardState;
use crate::drag::DragSession;
use crate::mvi::UiState;

/// Everything the board view needs: the tasks and the gesture in progress.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardModel {
    pub board: BoardState,
    pub session: DragSession,
}

impl UiState for BoardModel {}

impl BoardModel {
    pub fn new(board: BoardState) -> Self {
        Self {
            board,
            session: DragSession::Idle,
        }
    }
}
