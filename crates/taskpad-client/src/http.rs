//! Native HTTP transport built on `reqwest`.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use taskpad_api_models::{
    CreateTaskRequest, Credentials, Task, TaskId, TokenResponse, UpdateTaskRequest,
};
use url::Url;

use crate::api::{TaskApi, decode_body, decode_task_list};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::operation::{HttpMethod, Operation};

/// Taskpad API client for native targets.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
}

impl HttpClient {
    /// Build a client with its own connection pool and the configured timeout.
    ///
    /// # Errors
    /// Returns [`ApiError::Network`] when the underlying client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApiError::Network(format!("failed to build HTTP client: {err}")))?;
        Ok(Self::with_client(client, config.base_url.clone()))
    }

    /// Wrap an existing `reqwest` client.
    #[must_use]
    pub const fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn request(
        &self,
        operation: Operation,
        token: Option<&str>,
    ) -> Result<RequestBuilder, ApiError> {
        let url = Url::parse(&operation.url(self.base_url.as_str()))
            .map_err(|err| ApiError::Network(format!("invalid request URL: {err}")))?;
        let method = match operation.method() {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        };
        let builder = self.client.request(method, url);
        Ok(match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    async fn execute(
        &self,
        operation: Operation,
        builder: RequestBuilder,
    ) -> Result<Vec<u8>, ApiError> {
        tracing::debug!(
            operation = operation.name(),
            method = operation.method().as_str(),
            path = %operation.path(),
            "sending request"
        );
        let response = builder.send().await.map_err(|err| {
            tracing::warn!(operation = operation.name(), error = %err, "request failed");
            ApiError::Network(format!("request to {} failed: {err}", operation.path()))
        })?;

        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await.map_err(|err| {
                ApiError::Network(format!("failed to read {} response: {err}", operation.path()))
            })?;
            return Ok(body.to_vec());
        }

        let body = response.bytes().await.unwrap_or_default();
        let error = ApiError::from_response(operation, status.as_u16(), &body);
        tracing::warn!(
            operation = operation.name(),
            status = status.as_u16(),
            error = %error,
            "server rejected request"
        );
        Err(error)
    }
}

#[async_trait(?Send)]
impl TaskApi for HttpClient {
    async fn signup(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let operation = Operation::Signup;
        let builder = self.request(operation, None)?.json(credentials);
        self.execute(operation, builder).await.map(drop)
    }

    async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        let operation = Operation::Login;
        let builder = self.request(operation, None)?.json(credentials);
        let body = self.execute(operation, builder).await?;
        decode_body(&body)
    }

    async fn list_tasks(&self, token: &str) -> Result<Vec<Task>, ApiError> {
        let operation = Operation::ListTasks;
        let builder = self.request(operation, Some(token))?;
        let body = self.execute(operation, builder).await?;
        decode_task_list(&body)
    }

    async fn create_task(&self, token: &str, title: &str) -> Result<Task, ApiError> {
        let operation = Operation::CreateTask;
        let builder = self
            .request(operation, Some(token))?
            .json(&CreateTaskRequest::open(title));
        let body = self.execute(operation, builder).await?;
        decode_body(&body)
    }

    async fn update_task(
        &self,
        token: &str,
        id: TaskId,
        completed: bool,
    ) -> Result<(), ApiError> {
        let operation = Operation::UpdateTask { id };
        let builder = self
            .request(operation, Some(token))?
            .json(&UpdateTaskRequest { completed });
        self.execute(operation, builder).await.map(drop)
    }

    async fn delete_task(&self, token: &str, id: TaskId) -> Result<(), ApiError> {
        let operation = Operation::DeleteTask { id };
        let builder = self.request(operation, Some(token))?;
        self.execute(operation, builder).await.map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use anyhow::Result;
    use httpmock::MockServer;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> Result<HttpClient> {
        let config = ClientConfig::new(&server.base_url())?;
        Ok(HttpClient::new(&config)?)
    }

    #[tokio::test]
    async fn signup_posts_credentials() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/signup")
                .json_body(json!({"username": "ada", "password": "hunter2"}));
            then.status(201);
        });

        client_for(&server)?
            .signup(&Credentials::new("ada", "hunter2"))
            .await?;
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn login_returns_token_and_session_sends_it_as_bearer() -> Result<()> {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/login");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"token": "tok-123"}));
        });
        let list = server.mock(|when, then| {
            when.method(GET)
                .path("/api/tasks")
                .header("authorization", "Bearer tok-123");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([{"id": 1, "title": "Task 1", "completed": false}]));
        });

        let client = client_for(&server)?;
        let mut session = Session::new();
        let response = client.login(&Credentials::new("ada", "pw")).await?;
        session.login(response.token);

        let tasks = client.list_tasks(session.require_token()?).await?;
        list.assert();
        assert_eq!(
            tasks,
            vec![Task {
                id: 1,
                title: "Task 1".into(),
                completed: false
            }]
        );

        session.logout();
        assert_eq!(session.require_token(), Err(ApiError::Unauthenticated));
        Ok(())
    }

    #[tokio::test]
    async fn base_url_path_prefix_is_kept() -> Result<()> {
        let server = MockServer::start_async().await;
        let prefixed = server.mock(|when, then| {
            when.method(GET)
                .path("/backend/api/tasks")
                .header("authorization", "Bearer tok");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([]));
        });
        let root = server.mock(|when, then| {
            when.method(GET).path("/api/tasks");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([]));
        });

        let config = ClientConfig::new(&format!("{}/backend", server.base_url()))?;
        let tasks = HttpClient::new(&config)?.list_tasks("tok").await?;
        assert!(tasks.is_empty());
        prefixed.assert();
        root.assert_hits(0);
        Ok(())
    }

    #[tokio::test]
    async fn login_failure_carries_server_message() -> Result<()> {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/login");
            then.status(401)
                .header("content-type", "application/json")
                .json_body(json!({"error": "Invalid username or password"}));
        });

        let err = client_for(&server)?
            .login(&Credentials::new("ada", "wrong"))
            .await
            .expect_err("login should fail");
        assert_eq!(
            err,
            ApiError::Server {
                status: 401,
                message: "Invalid username or password".into()
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn create_task_submits_open_task_and_returns_record() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/tasks")
                .header("authorization", "Bearer tok")
                .json_body(json!({"title": "  buy milk ", "completed": false}));
            then.status(201)
                .header("content-type", "application/json")
                .json_body(json!({"id": 9, "title": "  buy milk ", "completed": false}));
        });

        let task = client_for(&server)?.create_task("tok", "  buy milk ").await?;
        mock.assert();
        assert_eq!(task.id, 9);
        assert!(!task.completed);
        Ok(())
    }

    #[tokio::test]
    async fn create_task_without_error_body_uses_default_message() -> Result<()> {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/tasks");
            then.status(500).body("internal failure");
        });

        let err = client_for(&server)?
            .create_task("tok", "x")
            .await
            .expect_err("create should fail");
        assert_eq!(err.to_string(), "Failed to create task");
        assert_eq!(err.status(), Some(500));
        Ok(())
    }

    #[tokio::test]
    async fn update_and_delete_target_task_paths() -> Result<()> {
        let server = MockServer::start_async().await;
        let update = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/tasks/5")
                .header("authorization", "Bearer tok")
                .json_body(json!({"completed": true}));
            then.status(204);
        });
        let delete = server.mock(|when, then| {
            when.method(DELETE)
                .path("/api/tasks/6")
                .header("authorization", "Bearer tok");
            then.status(200).body("ignored");
        });

        let client = client_for(&server)?;
        client.update_task("tok", 5, true).await?;
        client.delete_task("tok", 6).await?;
        update.assert();
        delete.assert();
        Ok(())
    }

    #[tokio::test]
    async fn null_task_list_is_empty() -> Result<()> {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/tasks");
            then.status(200)
                .header("content-type", "application/json")
                .body("null");
        });

        assert!(client_for(&server)?.list_tasks("tok").await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_server_is_network_error() -> Result<()> {
        let config = ClientConfig::new("http://127.0.0.1:9")?
            .with_timeout(std::time::Duration::from_secs(2));
        let err = HttpClient::new(&config)?
            .list_tasks("tok")
            .await
            .expect_err("nothing listens on the discard port");
        assert!(matches!(err, ApiError::Network(_)), "unexpected {err:?}");
        Ok(())
    }
}
