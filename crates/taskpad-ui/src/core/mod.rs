//! Core, DOM-free primitives and helpers for the Web UI.
pub mod auth;
pub mod form;
pub mod store;
