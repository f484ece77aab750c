//! Upstream domain types
//!
//! An upstream is a named load-balancing pool of targets. The hashing and
//! health-check fields mirror the admin API's upstream object.

use serde::{Deserialize, Serialize};

use super::{null_as_default, ForeignKey};

/// Load balancing algorithm used by an upstream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadBalancingAlgorithm {
    ConsistentHashing,
    LeastConnections,
    #[default]
    RoundRobin,
}

/// Request attribute an upstream hashes on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashingInput {
    Consumer,
    #[serde(rename = "ip")]
    IpAddress,
    Header,
    Cookie,
    Path,
    #[serde(rename = "query_arg")]
    QueryArgument,
    UriCapture,
    #[default]
    None,
}

/// Upstream configuration as stored in the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamConfiguration {
    pub id: String,

    #[serde(default)]
    pub created_at: Option<f64>,

    pub name: String,

    #[serde(default)]
    pub algorithm: LoadBalancingAlgorithm,

    #[serde(default)]
    pub hash_on: HashingInput,

    #[serde(default)]
    pub hash_fallback: HashingInput,

    #[serde(default)]
    pub hash_on_header: Option<String>,

    #[serde(default)]
    pub hash_fallback_header: Option<String>,

    #[serde(default)]
    pub hash_on_cookie: Option<String>,

    #[serde(default)]
    pub hash_on_cookie_path: Option<String>,

    #[serde(default)]
    pub hash_on_query_arg: Option<String>,

    #[serde(default)]
    pub hash_fallback_query_arg: Option<String>,

    #[serde(default)]
    pub hash_on_uri_capture: Option<String>,

    #[serde(default)]
    pub hash_fallback_uri_capture: Option<String>,

    #[serde(default)]
    pub slots: u32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub healthchecks: HealthChecks,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    #[serde(default)]
    pub host_header: Option<String>,

    #[serde(default)]
    pub client_certificate: Option<ForeignKey>,
}

/// Active and passive health-check policy of an upstream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthChecks {
    pub active: ActiveHealthCheck,
    pub passive: PassiveHealthCheck,
    pub threshold: f64,
}

/// Probes the gateway sends to targets on its own schedule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveHealthCheck {
    pub timeout: f64,
    pub concurrency: u32,
    #[serde(rename = "type")]
    pub check_type: String,
    pub http_path: String,
    pub https_sni: Option<String>,
    pub https_verify_certificate: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub headers: serde_json::Map<String, serde_json::Value>,
    pub healthy: ActiveHealthy,
    pub unhealthy: ActiveUnhealthy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveHealthy {
    pub interval: f64,
    pub successes: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub http_statuses: Vec<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveUnhealthy {
    pub interval: f64,
    pub tcp_failures: u32,
    pub timeouts: u32,
    pub http_failures: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub http_statuses: Vec<u16>,
}

/// Health inferred from proxied traffic
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassiveHealthCheck {
    #[serde(rename = "type")]
    pub check_type: String,
    pub healthy: PassiveHealthy,
    pub unhealthy: PassiveUnhealthy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassiveHealthy {
    pub successes: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub http_statuses: Vec<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassiveUnhealthy {
    pub tcp_failures: u32,
    pub timeouts: u32,
    pub http_failures: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub http_statuses: Vec<u16>,
}
