//! # Structured Logging
//!
//! Installs a `tracing_subscriber` formatter filtered by `RUST_LOG`.
//!
//! Without `RUST_LOG` the filter defaults to `info`, or `debug` in verbose mode.
//! Request and response bodies are logged at `trace` level, and only when the client
//! was built with [`ClientConfig::verbose`](crate::config::ClientConfig::verbose).

use std::str::FromStr;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::errors::{KongError, Result};

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = KongError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(KongError::config(format!(
                "Unsupported log format: '{}'. Use 'text' or 'json'.",
                other
            ))),
        }
    }
}

/// Install a text subscriber; see [`init_logging_with_format`]
pub fn init_logging(verbose: bool) -> Result<()> {
    init_logging_with_format(verbose, LogFormat::Text)
}

/// Install the global subscriber
///
/// An already-installed subscriber (e.g. one set up by a test harness) is left in
/// place and the call still succeeds.
pub fn init_logging_with_format(verbose: bool, format: LogFormat) -> Result<()> {
    let filter = build_filter(verbose, std::env::var("RUST_LOG").ok().as_deref())?;

    let installed = match format {
        LogFormat::Text => tracing::subscriber::set_global_default(
            FmtSubscriber::builder().with_env_filter(filter).finish(),
        ),
        LogFormat::Json => tracing::subscriber::set_global_default(
            FmtSubscriber::builder().with_env_filter(filter).json().finish(),
        ),
    };

    if installed.is_err() {
        // Subscriber already set elsewhere; ignore.
    }
    Ok(())
}

fn build_filter(verbose: bool, directives: Option<&str>) -> Result<EnvFilter> {
    match directives {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives)
            .map_err(|e| KongError::config(format!("Invalid RUST_LOG '{}': {}", directives, e))),
        _ => Ok(EnvFilter::new(if verbose { "debug" } else { "info" })),
    }
}
