//! Transport-neutral API contract.
//!
//! # Design
//! - One request per call; no retries, caching, or deduplication.
//! - `?Send` futures so the same trait serves the browser event loop and tokio.
//! - Body decoding is shared so every transport treats payloads identically.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use taskpad_api_models::{Credentials, Task, TaskId, TokenResponse};

use crate::error::ApiError;

/// Operations offered by the Taskpad REST API.
#[async_trait(?Send)]
pub trait TaskApi {
    /// `POST /signup`.
    async fn signup(&self, credentials: &Credentials) -> Result<(), ApiError>;

    /// `POST /login`, returning the bearer token.
    async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError>;

    /// `GET /api/tasks`, in server order.
    async fn list_tasks(&self, token: &str) -> Result<Vec<Task>, ApiError>;

    /// `POST /api/tasks` with `completed=false`; returns the stored record.
    async fn create_task(&self, token: &str, title: &str) -> Result<Task, ApiError>;

    /// `PUT /api/tasks/{id}`.
    async fn update_task(&self, token: &str, id: TaskId, completed: bool)
    -> Result<(), ApiError>;

    /// `DELETE /api/tasks/{id}`.
    async fn delete_task(&self, token: &str, id: TaskId) -> Result<(), ApiError>;
}

/// Decode a 2xx JSON body.
///
/// # Errors
/// Returns [`ApiError::Decode`] when the body is not a valid `T`.
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Decode a task list body; a JSON `null` means no tasks.
///
/// # Errors
/// Returns [`ApiError::Decode`] when the body is neither `null` nor a task array.
pub fn decode_task_list(body: &[u8]) -> Result<Vec<Task>, ApiError> {
    decode_body::<Option<Vec<Task>>>(body).map(Option::unwrap_or_default)
}
