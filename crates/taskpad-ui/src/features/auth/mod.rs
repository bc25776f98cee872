//! Signup and login feature wiring.
//!
//! # Design
//! - Form validation and user-facing wording live in DOM-free logic.
//! - Pages own the API call and navigation; the form only collects input.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
