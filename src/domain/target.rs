//! Upstream target domain types

use serde::{Deserialize, Serialize};

use super::{null_as_default, ForeignKey};

/// One backend address (`host:port`) registered in an upstream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamTargetInformation {
    pub id: String,

    #[serde(default)]
    pub created_at: Option<f64>,

    pub upstream: ForeignKey,

    /// Target address as sent on creation, e.g. `10.0.0.5:8000`
    #[serde(rename = "target")]
    pub address: String,

    #[serde(default)]
    pub weight: u32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}
