//! Feature slices: state, actions, logic, and views grouped by concern.

pub mod auth;
pub mod tasks;
