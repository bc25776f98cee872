//! Credential form logic.

use taskpad_api_models::Credentials;
use taskpad_client::ApiError;

use crate::core::form::FormError;

/// Which account flow a credential form drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    /// Create an account.
    Signup,
    /// Start a session.
    Login,
}

impl AuthMode {
    /// Submit button label.
    #[must_use]
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::Signup => "Signup",
            Self::Login => "Login",
        }
    }

    /// Page heading.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Signup => "Signup Page",
            Self::Login => "Login Page",
        }
    }

    /// Message shown when the server rejects the form.
    #[must_use]
    pub fn failure_message(self, error: &ApiError) -> String {
        let prefix = match self {
            Self::Signup => "Signup failed",
            Self::Login => "Login failed",
        };
        format!("{prefix}: {error}")
    }
}

/// Notice shown after a successful signup.
pub const SIGNUP_SUCCESS: &str = "Signup successful! Please login.";

/// Build credentials from raw form fields; values are submitted as typed.
///
/// # Errors
/// Returns a [`FormError`] naming the first empty field.
pub fn validate_credentials(username: &str, password: &str) -> Result<Credentials, FormError> {
    if username.is_empty() {
        return Err(FormError::EmptyUsername);
    }
    if password.is_empty() {
        return Err(FormError::EmptyPassword);
    }
    Ok(Credentials::new(username, password))
}
