//! Route access rules.
//!
//! # Design
//! - Routes declare their access level; the router asks [`guard`] before rendering.
//! - The decision is a pure function of the session so it can be tested without a DOM.

use taskpad_client::Session;

/// Access level declared by a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Reachable without a session.
    Public,
    /// Requires a bearer token.
    Protected,
}

/// Routing decision for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the route.
    Allow,
    /// Send the user to the login page instead.
    RedirectToLogin,
}

/// Decide whether `session` may open a route with `access`.
#[must_use]
pub fn guard(access: Access, session: &Session) -> GuardOutcome {
    match access {
        Access::Public => GuardOutcome::Allow,
        Access::Protected if session.is_authenticated() => GuardOutcome::Allow,
        Access::Protected => GuardOutcome::RedirectToLogin,
    }
}
