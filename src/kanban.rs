//! Kanban board logic: partitioning the filtered task sequence into status
//! columns and the drag/move state machine that reassigns a task's status
//! on drop. Rendering lives in `ui`; nothing here touches the terminal.

use tracing::debug;

use crate::store::TaskStore;
use crate::task::{Status, Task};

/// The configured lanes, in display order. A task whose status has no lane
/// (e.g. Overdue) stays in the store but is not rendered on the board.
pub const COLUMNS: [Status; 3] = [Status::ToDo, Status::InProgress, Status::Completed];

/// Split the filtered sequence into one bucket per configured column,
/// preserving relative order within each bucket.
pub fn partition<'a>(tasks: &[&'a Task], columns: &[Status]) -> Vec<Vec<&'a Task>> {
    columns
        .iter()
        .map(|&col| tasks.iter().copied().filter(|t| t.status == col).collect())
        .collect()
}

/// What a drag gesture was released over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Released over a column's own area.
    Column(Status),
    /// Released over another task's card; the target column is that task's.
    Task(u32),
    /// Released outside every column.
    Outside,
}

/// A committed status change, reported so the UI can surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub task_id: u32,
    pub from: Status,
    pub to: Status,
}

/// Single-pointer drag interaction: at most one task is mid-drag at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        task_id: u32,
    },
}

impl DragState {
    /// Start dragging a task. A second drag-start while one is active
    /// replaces the active task (the previous gesture was never released,
    /// so it had no effect to undo).
    pub fn begin(&mut self, task_id: u32) {
        *self = DragState::Dragging { task_id };
    }

    pub fn active_task(&self) -> Option<u32> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { task_id } => Some(*task_id),
        }
    }

    /// Finish the gesture: resolve the drop target and commit at most one
    /// status mutation to the store. Returns the change if one was made.
    /// A cancelled drop (outside any column) and a drop onto the task's own
    /// column are both silent no-ops. Always returns to Idle.
    pub fn end(&mut self, store: &mut TaskStore, target: DropTarget) -> Option<StatusChange> {
        let DragState::Dragging { task_id } = *self else {
            return None;
        };
        *self = DragState::Idle;

        let to = resolve_target_column(store, target)?;
        let from = store.task(task_id)?.status;
        if from == to {
            return None;
        }
        if !store.set_task_status(task_id, to) {
            return None;
        }
        debug!(task_id, %from, %to, "task moved between columns");
        Some(StatusChange { task_id, from, to })
    }

    /// Abandon the gesture without resolving a target (Esc, focus loss).
    pub fn cancel(&mut self) {
        *self = DragState::Idle;
    }
}

/// Map a drop target to the column it designates, if any. Dropping onto a
/// task inherits that task's column membership; a task can only be a valid
/// target while it is displayed, so its status is always a configured lane.
fn resolve_target_column(store: &TaskStore, target: DropTarget) -> Option<Status> {
    match target {
        DropTarget::Column(status) => COLUMNS.contains(&status).then_some(status),
        DropTarget::Task(id) => {
            let status = store.task(id)?.status;
            COLUMNS.contains(&status).then_some(status)
        }
        DropTarget::Outside => None,
    }
}
