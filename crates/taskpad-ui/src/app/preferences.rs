//! Persistence and environment helpers for the app shell.

use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use taskpad_client::config::{DEFAULT_API_URL, parse_base_url};

pub(crate) const TOKEN_KEY: &str = "taskpad.session.token";
pub(crate) const API_URL_KEY: &str = "taskpad.api_url";

pub(crate) fn load_token() -> Option<String> {
    let value = LocalStorage::get::<String>(TOKEN_KEY).ok()?;
    if value.trim().is_empty() {
        return None;
    }
    Some(value)
}

pub(crate) fn persist_token(token: Option<&str>) {
    match token {
        Some(token) => {
            if let Err(err) = LocalStorage::set(TOKEN_KEY, token) {
                console::error!(format!("failed to store session token: {err}"));
            }
        }
        None => LocalStorage::delete(TOKEN_KEY),
    }
}

/// Backend base URL: a stored override when it parses, else the default.
pub(crate) fn api_base_url() -> String {
    match LocalStorage::get::<String>(API_URL_KEY) {
        Ok(value) => match parse_base_url(&value) {
            Ok(url) => url.as_str().trim_end_matches('/').to_string(),
            Err(err) => {
                console::warn!(format!("ignoring {API_URL_KEY}: {err}"));
                DEFAULT_API_URL.to_string()
            }
        },
        Err(_) => DEFAULT_API_URL.to_string(),
    }
}
