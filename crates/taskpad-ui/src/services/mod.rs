//! Browser services (REST transport).

pub mod api;
