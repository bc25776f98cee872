//! Client-side form validation failures.

use std::fmt::{self, Display, Formatter};

/// Input rejected before any request is issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormError {
    /// Task title is empty or whitespace only.
    EmptyTitle,
    /// Username field is empty.
    EmptyUsername,
    /// Password field is empty.
    EmptyPassword,
}

impl Display for FormError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::EmptyTitle => "Title must not be empty",
            Self::EmptyUsername => "Username is required",
            Self::EmptyPassword => "Password is required",
        })
    }
}

impl std::error::Error for FormError {}
