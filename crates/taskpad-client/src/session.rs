//! Bearer-token session state.
//!
//! # Design
//! - Keep the session as plain data so callers own its lifetime and storage.
//! - Blank tokens count as logged out.
//! - Token validity is the server's concern; no expiry tracking here.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::operation::bearer_value;

/// Current authentication state for outbound requests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

impl Session {
    /// Logged-out session.
    #[must_use]
    pub const fn new() -> Self {
        Self { token: None }
    }

    /// Session restored from a stored token.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        let mut session = Self::new();
        session.login(token);
        session
    }

    /// Whether a usable token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// The bearer token, if logged in.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
    }

    /// Store `token` after a successful login.
    pub fn login(&mut self, token: impl Into<String>) {
        let token = token.into();
        self.token = if token.trim().is_empty() {
            None
        } else {
            Some(token)
        };
    }

    /// Forget the token.
    pub fn logout(&mut self) {
        self.token = None;
    }

    /// Token for a protected call.
    ///
    /// # Errors
    /// Returns [`ApiError::Unauthenticated`] when logged out.
    pub fn require_token(&self) -> Result<&str, ApiError> {
        self.token().ok_or(ApiError::Unauthenticated)
    }

    /// `Authorization` header value for the current token.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.token().map(bearer_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_then_logout_round_trip() {
        let mut session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.require_token(), Err(ApiError::Unauthenticated));

        session.login("tok-1");
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("tok-1"));
        assert_eq!(session.authorization().as_deref(), Some("Bearer tok-1"));

        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(session.authorization(), None);
    }

    #[test]
    fn blank_tokens_are_not_credentials() {
        assert!(!Session::with_token("").is_authenticated());
        assert!(!Session::with_token("   ").is_authenticated());
        let restored: Session = serde_json::from_str(r#"{"token":" "}"#).expect("decode");
        assert!(!restored.is_authenticated());
    }

    #[test]
    fn session_serializes_as_token_document() {
        let json = serde_json::to_string(&Session::with_token("abc")).expect("encode");
        assert_eq!(json, r#"{"token":"abc"}"#);
        let empty: Session = serde_json::from_str("{}").expect("decode");
        assert_eq!(empty, Session::new());
    }
}
