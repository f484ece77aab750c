//! Configuration file handling for the kong-access CLI
//!
//! Manages loading and saving CLI configuration from ~/.kong-access/config.toml
//! and resolving connection settings from multiple sources.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{parse_bool, ConnectionSettings};

/// CLI configuration stored in ~/.kong-access/config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Admin API host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Admin API port
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u32>,

    /// Use https for the admin API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_tls: Option<bool>,

    /// Request timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl CliConfig {
    /// Get the default configuration file path (~/.kong-access/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .context("Unable to determine home directory")?;

        let mut path = PathBuf::from(home);
        path.push(".kong-access");
        path.push("config.toml");

        Ok(path)
    }

    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_path()?)
    }

    /// Load configuration from a specific path; a missing file yields the defaults
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::config_path()?)
    }

    /// Save configuration to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Apply `key = value` as typed on the command line
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "host" => {
                if value.trim().is_empty() {
                    anyhow::bail!("Host must not be empty");
                }
                self.host = Some(value.trim().to_string());
            }
            "port" => {
                let port: u32 = value.trim().parse().context("Invalid port value. Must be a number")?;
                if !(1..=65535).contains(&port) {
                    anyhow::bail!("Port {} is outside 1-65535", port);
                }
                self.port = Some(port);
            }
            "use_tls" => {
                let use_tls = parse_bool(value)
                    .with_context(|| format!("Invalid use_tls value '{}'. Use true or false", value))?;
                self.use_tls = Some(use_tls);
            }
            "timeout" => {
                let timeout: u64 = value
                    .trim()
                    .parse()
                    .context("Invalid timeout value. Must be a number in seconds")?;
                self.timeout = Some(timeout);
            }
            _ => {
                anyhow::bail!(
                    "Unknown configuration key: '{}'. Valid keys: host, port, use_tls, timeout",
                    key
                );
            }
        }
        Ok(())
    }
}

/// Command-line overrides for the admin API address
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionFlags {
    pub host: Option<String>,
    pub port: Option<u32>,
    pub use_tls: Option<bool>,
}

/// Resolve where the admin API listens
///
/// Each field is taken from the first source that sets it:
/// 1. command line flag (--host, --port, --tls / --no-tls)
/// 2. ~/.kong-access/config.toml
/// 3. KONG_ADMIN_HOST / KONG_ADMIN_PORT / KONG_ADMIN_TLS
/// 4. Default: localhost:8001 over http
///
/// The environment is only read when a field is still unset after the first two
/// sources.
pub fn resolve_connection(flags: ConnectionFlags, config: &CliConfig) -> Result<ConnectionSettings> {
    let host = flags.host.or_else(|| config.host.clone().filter(|host| !host.is_empty()));
    let port = flags.port.or(config.port);
    let use_tls = flags.use_tls.or(config.use_tls);

    if let (Some(host), Some(port), Some(use_tls)) = (&host, port, use_tls) {
        debug!("Using connection settings from flags and config file");
        return Ok(ConnectionSettings::new(host.as_str(), port, use_tls));
    }

    let fallback = ConnectionSettings::from_env()
        .context("Failed to read connection settings from the environment")?;
    debug!("Filling unset connection settings from KONG_ADMIN_* or defaults");

    Ok(ConnectionSettings {
        host: host.unwrap_or(fallback.host),
        port: port.unwrap_or(fallback.port),
        use_tls: use_tls.unwrap_or(fallback.use_tls),
    })
}

/// Resolve the timeout
///
/// Checks sources in the following priority order:
/// 1. --timeout command line flag
/// 2. ~/.kong-access/config.toml
/// 3. No timeout
pub fn resolve_timeout(timeout_flag: Option<u64>, config: &CliConfig) -> Option<u64> {
    if let Some(timeout) = timeout_flag {
        debug!("Using timeout from --timeout flag: {} seconds", timeout);
        return Some(timeout);
    }

    if let Some(timeout) = config.timeout {
        debug!("Using timeout from config file: {} seconds", timeout);
        return Some(timeout);
    }

    None
}
