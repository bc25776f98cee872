//! HTTP client for the browser, built on `gloo-net`.

use async_trait::async_trait;
use gloo::console;
use gloo_net::http::Request;
use serde::Serialize;
use taskpad_api_models::{
    CreateTaskRequest, Credentials, Task, TaskId, TokenResponse, UpdateTaskRequest,
};
use taskpad_client::api::{decode_body, decode_task_list};
use taskpad_client::operation::bearer_value;
use taskpad_client::{ApiError, HttpMethod, Operation, TaskApi};

/// Taskpad API client for wasm32 builds.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Client rooted at `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn request(&self, operation: Operation, token: Option<&str>) -> Request {
        let url = operation.url(&self.base_url);
        let request = match operation.method() {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Delete => Request::delete(&url),
        };
        match token {
            Some(token) => request.header("Authorization", &bearer_value(token)),
            None => request,
        }
    }

    fn with_json<T: Serialize>(request: Request, body: &T) -> Result<Request, ApiError> {
        request
            .json(body)
            .map_err(|err| ApiError::Network(format!("failed to encode request: {err}")))
    }

    async fn execute(&self, operation: Operation, request: Request) -> Result<Vec<u8>, ApiError> {
        let response = request.send().await.map_err(|err| {
            console::warn!(format!("{} failed: {err}", operation.name()));
            ApiError::Network(err.to_string())
        })?;
        let body = response.binary().await.unwrap_or_default();
        if response.ok() {
            return Ok(body);
        }
        Err(ApiError::from_response(operation, response.status(), &body))
    }
}

#[async_trait(?Send)]
impl TaskApi for ApiClient {
    async fn signup(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let operation = Operation::Signup;
        let request = Self::with_json(self.request(operation, None), credentials)?;
        self.execute(operation, request).await.map(drop)
    }

    async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        let operation = Operation::Login;
        let request = Self::with_json(self.request(operation, None), credentials)?;
        let body = self.execute(operation, request).await?;
        decode_body(&body)
    }

    async fn list_tasks(&self, token: &str) -> Result<Vec<Task>, ApiError> {
        let operation = Operation::ListTasks;
        let body = self
            .execute(operation, self.request(operation, Some(token)))
            .await?;
        decode_task_list(&body)
    }

    async fn create_task(&self, token: &str, title: &str) -> Result<Task, ApiError> {
        let operation = Operation::CreateTask;
        let request = Self::with_json(
            self.request(operation, Some(token)),
            &CreateTaskRequest::open(title),
        )?;
        let body = self.execute(operation, request).await?;
        decode_body(&body)
    }

    async fn update_task(
        &self,
        token: &str,
        id: TaskId,
        completed: bool,
    ) -> Result<(), ApiError> {
        let operation = Operation::UpdateTask { id };
        let request = Self::with_json(
            self.request(operation, Some(token)),
            &UpdateTaskRequest { completed },
        )?;
        self.execute(operation, request).await.map(drop)
    }

    async fn delete_task(&self, token: &str, id: TaskId) -> Result<(), ApiError> {
        let operation = Operation::DeleteTask { id };
        self.execute(operation, self.request(operation, Some(token)))
            .await
            .map(drop)
    }
}
