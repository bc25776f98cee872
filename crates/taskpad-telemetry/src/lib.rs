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
//! Logging setup for the Taskpad command-line tools.
//!
//! Events go to stderr so command output on stdout stays machine-readable.
//! `RUST_LOG` takes precedence over the configured level, and a second call to
//! [`init_logging`] keeps whatever was installed first.

use std::io;
use std::str::FromStr;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when neither `RUST_LOG` nor a flag says otherwise.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

static INSTALLED: OnceCell<LogFormat> = OnceCell::new();

/// What to install.
#[derive(Debug, Clone)]
pub struct LoggingConfig<'a> {
    /// `EnvFilter` directive such as `info` or `taskpad_client=debug`.
    pub directives: &'a str,
    /// Line format.
    pub format: LogFormat,
}

impl Default for LoggingConfig<'_> {
    fn default() -> Self {
        Self {
            directives: DEFAULT_LOG_LEVEL,
            format: LogFormat::for_build(),
        }
    }
}

/// Line format written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// Human-readable text.
    Pretty,
}

impl LogFormat {
    /// Text for debug builds, JSON for release builds.
    #[must_use]
    pub const fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Pretty
        } else {
            Self::Json
        }
    }
}

/// Unknown log format name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log format '{0}' (expected json or pretty)")]
pub struct ParseLogFormatError(String);

impl FromStr for LogFormat {
    type Err = ParseLogFormatError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" | "text" => Ok(Self::Pretty),
            _ => Err(ParseLogFormatError(value.to_string())),
        }
    }
}

/// Install the global subscriber described by `config`.
///
/// # Errors
///
/// Fails when a subscriber not installed through this function is already active.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    INSTALLED
        .get_or_try_init(|| install(config).map(|()| config.format))
        .map(|_| ())
}

/// Format chosen by the first successful [`init_logging`] call.
#[must_use]
pub fn installed_format() -> Option<LogFormat> {
    INSTALLED.get().copied()
}

fn install(config: &LoggingConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.directives));
    let (json, text) = match config.format {
        LogFormat::Json => (Some(fmt::layer().json().with_writer(io::stderr)), None),
        LogFormat::Pretty => (
            None,
            Some(fmt::layer().with_writer(io::stderr).with_target(false)),
        ),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(text)
        .try_init()
        .context("failed to install tracing subscriber")
}
