//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Use small, focused slices so reducers stay predictable.
//! - Logging out clears every per-user slice in the same reduction.

use taskpad_client::Session;
use yewdux::store::Store;

use crate::features::tasks::state::{TasksState, clear};

/// Global application store for shared state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct AppStore {
    /// Session state.
    pub auth: AuthSlice,
    /// Task list state.
    pub tasks: TasksState,
}

/// Shared authentication state for the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthSlice {
    /// Current bearer-token session.
    pub session: Session,
}

/// Store a freshly issued token.
pub fn sign_in(store: &mut AppStore, token: impl Into<String>) {
    store.auth.session.login(token);
}

/// Forget the token and everything loaded with it.
pub fn sign_out(store: &mut AppStore) {
    store.auth.session.logout();
    clear(&mut store.tasks);
}

/// Current bearer token, if logged in.
#[must_use]
pub fn select_token(store: &AppStore) -> Option<String> {
    store.auth.session.token().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::tasks::state::set_tasks;
    use taskpad_api_models::{Task, TaskFilter};

    #[test]
    fn sign_in_then_out_round_trips_session() {
        let mut store = AppStore::default();
        assert_eq!(select_token(&store), None);

        sign_in(&mut store, "tok-1");
        assert!(store.auth.session.is_authenticated());
        assert_eq!(select_token(&store).as_deref(), Some("tok-1"));

        set_tasks(
            &mut store.tasks,
            vec![Task {
                id: 1,
                title: "Task 1".into(),
                completed: false,
            }],
        );
        store.tasks.filter = TaskFilter::Active;

        sign_out(&mut store);
        assert_eq!(store, AppStore::default());
    }

    #[test]
    fn blank_token_does_not_sign_in() {
        let mut store = AppStore::default();
        sign_in(&mut store, "  ");
        assert!(!store.auth.session.is_authenticated());
    }
}
