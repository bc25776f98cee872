//! Task feature actions.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Actions are UI-only and never perform side effects.

use taskpad_api_models::{Task, TaskFilter, TaskId};

use crate::features::tasks::controller::TaskCommand;

/// High-level task list actions from the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskAction {
    /// Create a task with the exact title typed.
    Add(String),
    /// Set a task's completion flag.
    Toggle {
        /// Target task.
        id: TaskId,
        /// Requested flag.
        completed: bool,
    },
    /// Delete a task.
    Delete(TaskId),
    /// Switch the visible subset.
    Filter(TaskFilter),
}

impl TaskAction {
    /// API command carrying out this action, if it needs the server.
    #[must_use]
    pub fn command(self) -> Option<TaskCommand> {
        match self {
            Self::Add(title) => Some(TaskCommand::Add { title }),
            Self::Toggle { id, completed } => Some(TaskCommand::Toggle { id, completed }),
            Self::Delete(id) => Some(TaskCommand::Delete { id }),
            Self::Filter(_) => None,
        }
    }
}

/// `(id, completed)` pair emitted by a row's checkbox: the row's flag, flipped.
#[must_use]
pub const fn toggle_intent(task: &Task) -> (TaskId, bool) {
    (task.id, !task.completed)
}

/// Id emitted by a row's delete button.
#[must_use]
pub const fn delete_intent(task: &Task) -> TaskId {
    task.id
}
