//! Service domain types
//!
//! A service tells the gateway where to proxy traffic. Its `host` is either a
//! plain hostname or the name of an upstream.

use serde::{Deserialize, Serialize};

use super::{null_as_default, ForeignKey};

fn default_enabled() -> bool {
    true
}

/// Service configuration as stored in the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfiguration {
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub created_at: Option<f64>,

    #[serde(default)]
    pub updated_at: Option<f64>,

    #[serde(default)]
    pub protocol: String,

    pub host: String,

    #[serde(default)]
    pub port: u16,

    #[serde(default)]
    pub path: Option<String>,

    #[serde(default)]
    pub retries: u32,

    /// Milliseconds
    #[serde(default)]
    pub connect_timeout: u64,

    /// Milliseconds
    #[serde(default)]
    pub write_timeout: u64,

    /// Milliseconds
    #[serde(default)]
    pub read_timeout: u64,

    #[serde(default)]
    pub tls_verify: Option<bool>,

    #[serde(default)]
    pub tls_verify_depth: Option<u32>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub ca_certificates: Vec<String>,

    #[serde(default)]
    pub client_certificate: Option<ForeignKey>,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}
