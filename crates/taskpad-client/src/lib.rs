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

//! Client-side contract for the Taskpad REST API.
//!
//! Layout:
//! - `operation.rs`: the six API calls with their method, path, and default error text
//! - `error.rs`: error taxonomy and response classification
//! - `session.rs`: bearer-token session state
//! - `api.rs`: the transport-neutral [`TaskApi`] trait and body decoding helpers
//! - `config.rs`: base URL and timeout configuration
//! - `http.rs`: native `reqwest` implementation (feature `http`)

pub mod api;
pub mod config;
pub mod error;
pub mod operation;
pub mod session;

#[cfg(all(feature = "http", not(target_arch = "wasm32")))]
pub mod http;

pub use api::TaskApi;
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use operation::{HttpMethod, Operation};
pub use session::Session;

#[cfg(all(feature = "http", not(target_arch = "wasm32")))]
pub use http::HttpClient;

pub use taskpad_api_models as models;
