//! Task list feature wiring.
//!
//! # Design
//! - Keep the task collection and filter in one slice of the app store.
//! - Route every API call through the controller so state changes only after the server confirms.
//! - Views stay thin: they emit actions and render selectors.

pub mod actions;
pub mod controller;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
