//! Command context and error type shared by CLI handlers.

use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

use anyhow::anyhow;
use taskpad_client::{ApiError, HttpClient, Session};

/// Why a command did not succeed; decides the process exit code.
#[derive(Debug)]
pub(crate) enum CliError {
    /// Input the user can fix: bad arguments, missing login, rejected request (exit 2).
    Validation(String),
    /// Transport, server, or local I/O trouble (exit 3).
    Failure(anyhow::Error),
}

pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        if matches!(self, Self::Validation(_)) { 2 } else { 3 }
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(message) => f.write_str(message),
            Self::Failure(error) => write!(f, "{error:#}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ApiError> for CliError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Unauthenticated => {
                Self::validation("not logged in (run `taskpad login` or pass --token)")
            }
            ApiError::Server {
                status: 400 | 409 | 422,
                message,
            } => Self::Validation(message),
            ApiError::Server { status, message } => {
                Self::failure(anyhow!("{message} (status {status})"))
            }
            other => Self::failure(other),
        }
    }
}

/// Everything a command handler needs: transport, credentials, and where to keep them.
pub(crate) struct AppContext {
    pub(crate) api: HttpClient,
    pub(crate) session: Session,
    pub(crate) session_file: PathBuf,
}
