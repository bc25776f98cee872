#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(
    missing_docs,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]
//! Taskpad web client.
//!
//! Layout:
//! - `core/`: DOM-free session guard and the app-wide yewdux store
//! - `features/`: per-feature state, actions, form logic, and controllers (views on wasm32)
//! - `models.rs`: UI-only view models (toasts)
//! - `services/`, `app/`, `components/`: browser transport, routing shell, and widgets
//!   (wasm32 only)

pub mod core;
pub mod features;
pub mod models;

#[cfg(target_arch = "wasm32")]
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
