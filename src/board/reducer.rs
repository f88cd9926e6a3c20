use crate::board::intent::BoardIntent;
use crate::board::model::BoardModel;
use crate::board::state::Durability;
use crate::drag::{DragEvent, DragSession, DropTarget};
use crate::mvi::Reducer;
use crate::reconcile;

pub struct BoardReducer;

impl Reducer for BoardReducer {
    type State = BoardModel;
    type Intent = BoardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let BoardModel { mut board, session } = state;

        match intent {
            BoardIntent::Load { tasks } => {
                board.replace_all(tasks, Durability::Loaded);
                BoardModel { board, session }
            }
            BoardIntent::ReplaceAll { tasks } => {
                board.replace_all(tasks, Durability::Durable);
                BoardModel { board, session }
            }
            BoardIntent::Add { task } => {
                let mut tasks = board.tasks().to_vec();
                tasks.push(task);
                board.replace_all(tasks, Durability::Durable);
                BoardModel { board, session }
            }
            BoardIntent::Delete { id } => {
                let tasks = board
                    .tasks()
                    .iter()
                    .filter(|task| task.id != id)
                    .cloned()
                    .collect();
                board.replace_all(tasks, Durability::Durable);
                BoardModel { board, session }
            }
            BoardIntent::Drag(event) => reduce_drag(BoardModel { board, session }, event),
        }
    }
}

fn reduce_drag(state: BoardModel, event: DragEvent) -> BoardModel {
    let BoardModel { mut board, session } = state;

    match event {
        DragEvent::Start { task_id } => {
            // Re-resolve against the current list; a stale id never opens a session.
            if board.contains(&task_id) {
                BoardModel {
                    board,
                    session: DragSession::Dragging {
                        active: task_id,
                        hover: None,
                    },
                }
            } else {
                BoardModel { board, session }
            }
        }
        DragEvent::Over { target } => match session {
            DragSession::Dragging { active, hover } => {
                if target == DropTarget::Task(active.clone()) {
                    return BoardModel {
                        board,
                        session: DragSession::Dragging { active, hover },
                    };
                }
                if let Some(tasks) = reconcile::preview(board.tasks(), &active, &target) {
                    board.replace_all(tasks, Durability::Preview);
                }
                BoardModel {
                    board,
                    session: DragSession::Dragging {
                        active,
                        hover: Some(target),
                    },
                }
            }
            // Late hover after the gesture ended.
            DragSession::Idle => BoardModel { board, session },
        },
        DragEvent::End { target } => finish(BoardModel { board, session }, target),
        DragEvent::Cancel => finish(BoardModel { board, session }, None),
    }
}

/// Close the session and write the board back exactly once.
///
/// Without a target (or with one that does not reorder) the current list,
/// including any hover-induced lane change, is still committed.
fn finish(state: BoardModel, target: Option<DropTarget>) -> BoardModel {
    let BoardModel { mut board, session } = state;

    let active = match session {
        DragSession::Dragging { active, .. } => active,
        DragSession::Idle => return BoardModel { board, session },
    };

    let tasks = target
        .and_then(|target| reconcile::commit(board.tasks(), &active, &target))
        .unwrap_or_else(|| board.tasks().to_vec());
    board.replace_all(tasks, Durability::Durable);

    BoardModel {
        board,
        session: DragSession::Idle,
    }
}
