//! Reconciliation engine.
//!
//! Pure functions that compute the next task list from a drag event. They
//! never hold on to the session: the active id and target are passed in on
//! every call, and `None` means "leave the list exactly as it is".
//!
//! Hovering only rewrites the active card's `status` in place; the lane views
//! re-partition by status, so the card appears in the new lane without its
//! list index changing. The single list move happens once, at drop.

use crate::drag::DropTarget;
use crate::task::{ColumnId, Task};

fn position_of(tasks: &[Task], id: &str) -> Option<usize> {
    tasks.iter().position(|task| task.id == id)
}

/// Live preview for a hover update.
///
/// Returns a new list with the active card moved to the hovered lane, or
/// `None` when membership would not change (same lane, hovering itself,
/// unknown ids).
pub fn preview(tasks: &[Task], active_id: &str, target: &DropTarget) -> Option<Vec<Task>> {
    let active_index = position_of(tasks, active_id)?;

    let next_status: ColumnId = match target {
        DropTarget::Column(column) => *column,
        DropTarget::Task(over_id) => {
            if over_id == active_id {
                return None;
            }
            tasks.iter().find(|task| &task.id == over_id)?.status
        }
    };

    if tasks[active_index].status == next_status {
        return None;
    }

    let mut next = tasks.to_vec();
    next[active_index].status = next_status;
    Some(next)
}

/// Final reordering at drop.
///
/// Only a card target can reorder: the active card is moved to the target's
/// index. Lane targets and unresolvable ids leave the list untouched, since
/// the last hover already applied any membership change.
pub fn commit(tasks: &[Task], active_id: &str, target: &DropTarget) -> Option<Vec<Task>> {
    let over_id = target.task_id()?;
    let from = position_of(tasks, active_id)?;
    let to = position_of(tasks, over_id)?;

    if from == to {
        return None;
    }
    Some(array_move(tasks.to_vec(), from, to))
}

/// Remove the element at `from` and reinsert it at `to`.
///
/// `array_move([A, B, C, D], 0, 2) == [B, C, A, D]`. An out-of-range `from`
/// returns the list unchanged; an out-of-range `to` appends.
pub fn array_move<T>(mut items: Vec<T>, from: usize, to: usize) -> Vec<T> {
    if from >= items.len() {
        return items;
    }
    let item = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, item);
    items
}
