//! Endpoint table shared by every transport.
//!
//! # Design
//! - One variant per REST call; ids travel inside the variant so paths can't drift.
//! - Default error messages live here so native and browser clients report identically.

use taskpad_api_models::TaskId;

/// HTTP verbs used by the Taskpad API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl HttpMethod {
    /// Upper-case verb as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A single Taskpad API call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Register a new account.
    Signup,
    /// Exchange credentials for a bearer token.
    Login,
    /// Fetch the caller's tasks.
    ListTasks,
    /// Create a task.
    CreateTask,
    /// Change a task's completion flag.
    UpdateTask {
        /// Target task.
        id: TaskId,
    },
    /// Remove a task.
    DeleteTask {
        /// Target task.
        id: TaskId,
    },
}

impl Operation {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Signup => "signup",
            Self::Login => "login",
            Self::ListTasks => "list_tasks",
            Self::CreateTask => "create_task",
            Self::UpdateTask { .. } => "update_task",
            Self::DeleteTask { .. } => "delete_task",
        }
    }

    /// HTTP verb for the call.
    #[must_use]
    pub const fn method(self) -> HttpMethod {
        match self {
            Self::ListTasks => HttpMethod::Get,
            Self::Signup | Self::Login | Self::CreateTask => HttpMethod::Post,
            Self::UpdateTask { .. } => HttpMethod::Put,
            Self::DeleteTask { .. } => HttpMethod::Delete,
        }
    }

    /// Absolute request path relative to the API base URL.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Signup => "/signup".to_string(),
            Self::Login => "/login".to_string(),
            Self::ListTasks | Self::CreateTask => "/api/tasks".to_string(),
            Self::UpdateTask { id } | Self::DeleteTask { id } => format!("/api/tasks/{id}"),
        }
    }

    /// Full request URL under `base_url`, keeping any path prefix it carries.
    #[must_use]
    pub fn url(self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }

    /// Whether the call needs an `Authorization: Bearer` header.
    #[must_use]
    pub const fn requires_token(self) -> bool {
        !matches!(self, Self::Signup | Self::Login)
    }

    /// Message reported when the server gives no usable error text.
    #[must_use]
    pub const fn default_error(self) -> &'static str {
        match self {
            Self::Signup => "Signup failed",
            Self::Login => "Login failed",
            Self::ListTasks => "Failed to fetch tasks",
            Self::CreateTask => "Failed to create task",
            Self::UpdateTask { .. } => "Failed to update task",
            Self::DeleteTask { .. } => "Failed to delete task",
        }
    }
}

/// Format an `Authorization` header value for `token`.
#[must_use]
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}
