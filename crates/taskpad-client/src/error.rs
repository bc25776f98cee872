//! Error taxonomy shared by every Taskpad client.

use taskpad_api_models::ErrorBody;

use crate::operation::Operation;

/// Failure of a Taskpad API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be received.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Server-supplied message, or the operation's default.
        message: String,
    },
    /// A 2xx response carried a body that was not the expected JSON.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// A protected call was attempted without a session token.
    #[error("not logged in")]
    Unauthenticated,
}

impl ApiError {
    /// Classify a non-2xx response.
    ///
    /// The message comes from the JSON `error` field when the body parses and
    /// carries one; otherwise the operation's default message is used.
    #[must_use]
    pub fn from_response(operation: Operation, status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message().map(str::to_string))
            .unwrap_or_else(|| operation.default_error().to_string());
        Self::Server { status, message }
    }

    /// HTTP status for server failures.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}
