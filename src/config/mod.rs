//! # Configuration Management
//!
//! Connection and transport settings for the admin API client.

use std::time::Duration;

use crate::errors::{KongError, Result};

/// Default admin API port of the gateway
pub const DEFAULT_ADMIN_PORT: u32 = 8001;

/// Where the gateway's admin API listens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub host: String,
    pub port: u32,
    pub use_tls: bool,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self { host: "localhost".to_string(), port: DEFAULT_ADMIN_PORT, use_tls: false }
    }
}

impl ConnectionSettings {
    pub fn new<H: Into<String>>(host: H, port: u32, use_tls: bool) -> Self {
        Self { host: host.into(), port, use_tls }
    }

    /// Create settings from environment variables
    ///
    /// Reads `KONG_ADMIN_HOST`, `KONG_ADMIN_PORT` and `KONG_ADMIN_TLS`; unset or blank
    /// variables fall back to the defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let host = env_value("KONG_ADMIN_HOST").unwrap_or(defaults.host);

        let port = match env_value("KONG_ADMIN_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| KongError::config(format!("Invalid KONG_ADMIN_PORT '{}': {}", raw, e)))?,
            None => defaults.port,
        };

        let use_tls = match env_value("KONG_ADMIN_TLS") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| KongError::config(format!("Invalid KONG_ADMIN_TLS '{}'", raw)))?,
            None => defaults.use_tls,
        };

        Ok(Self { host, port, use_tls })
    }

    /// Validate the settings and build `scheme://host:port`
    pub fn base_url(&self) -> Result<String> {
        if self.host.trim().is_empty() {
            return Err(KongError::empty_parameter("host"));
        }
        if !(1..=65535).contains(&self.port) {
            return Err(KongError::InvalidPort { port: self.port });
        }

        let scheme = if self.use_tls { "https" } else { "http" };
        Ok(format!("{}://{}:{}", scheme, self.host.trim(), self.port))
    }
}

/// Transport configuration shared by every request of a client
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Per-request timeout; `None` leaves the transport without one
    pub timeout: Option<Duration>,

    /// Trace request and response bodies
    pub verbose: bool,
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().map(|raw| raw.trim().to_string()).filter(|raw| !raw.is_empty())
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
