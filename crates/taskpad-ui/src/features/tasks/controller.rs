//! Task list controller.
//!
//! # Design
//! - Confirm-then-apply: [`execute`] talks to the server, [`apply_effect`] mutates state.
//! - One request per command; no retries and no optimistic updates.
//! - Generic over [`TaskApi`] so the browser transport and test fakes share one path.

use std::fmt::{self, Display, Formatter};

use taskpad_api_models::{Task, TaskId};
use taskpad_client::{ApiError, Session, TaskApi};

use crate::features::tasks::state::{
    TasksState, remove_task, set_completed, set_tasks, upsert_task,
};

/// Server-backed task list operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskCommand {
    /// Fetch the full collection.
    Load,
    /// Create a task.
    Add {
        /// Title exactly as typed.
        title: String,
    },
    /// Set a task's completion flag.
    Toggle {
        /// Target task.
        id: TaskId,
        /// New flag.
        completed: bool,
    },
    /// Delete a task.
    Delete {
        /// Target task.
        id: TaskId,
    },
}

/// Server-confirmed outcome of a [`TaskCommand`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskEffect {
    /// Fresh snapshot of the collection.
    Loaded(Vec<Task>),
    /// Stored record of a created task.
    Added(Task),
    /// Completion flag accepted by the server.
    Toggled {
        /// Target task.
        id: TaskId,
        /// New flag.
        completed: bool,
    },
    /// Task removed on the server.
    Deleted {
        /// Target task.
        id: TaskId,
    },
}

/// A command the server did not confirm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskFailure {
    /// The command that failed.
    pub command: TaskCommand,
    /// Underlying API error.
    pub error: ApiError,
}

impl TaskFailure {
    /// Message shown to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match &self.command {
            TaskCommand::Load => format!("Failed to fetch tasks: {}", self.error),
            TaskCommand::Add { title } => {
                format!("Failed to add task \"{title}\": {}", self.error)
            }
            TaskCommand::Toggle { .. } => format!("Failed to update task: {}", self.error),
            TaskCommand::Delete { .. } => format!("Failed to delete task: {}", self.error),
        }
    }
}

impl Display for TaskFailure {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.user_message())
    }
}

impl std::error::Error for TaskFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Run `command` against the server.
///
/// # Errors
/// Returns a [`TaskFailure`] when there is no session token or the call fails.
pub async fn execute<A>(
    api: &A,
    session: &Session,
    command: TaskCommand,
) -> Result<TaskEffect, TaskFailure>
where
    A: TaskApi + ?Sized,
{
    let token = match session.require_token() {
        Ok(token) => token,
        Err(error) => return Err(TaskFailure { command, error }),
    };
    let result = match &command {
        TaskCommand::Load => api.list_tasks(token).await.map(TaskEffect::Loaded),
        TaskCommand::Add { title } => api.create_task(token, title).await.map(TaskEffect::Added),
        TaskCommand::Toggle { id, completed } => api
            .update_task(token, *id, *completed)
            .await
            .map(|()| TaskEffect::Toggled {
                id: *id,
                completed: *completed,
            }),
        TaskCommand::Delete { id } => api
            .delete_task(token, *id)
            .await
            .map(|()| TaskEffect::Deleted { id: *id }),
    };
    result.map_err(|error| TaskFailure { command, error })
}

/// Apply a confirmed effect to the task slice.
pub fn apply_effect(state: &mut TasksState, effect: TaskEffect) {
    match effect {
        TaskEffect::Loaded(tasks) => set_tasks(state, tasks),
        TaskEffect::Added(task) => upsert_task(state, task),
        TaskEffect::Toggled { id, completed } => {
            set_completed(state, id, completed);
        }
        TaskEffect::Deleted { id } => {
            remove_task(state, id);
        }
    }
}
