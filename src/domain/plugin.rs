//! Plugin domain types

use serde::{Deserialize, Serialize};

use super::{null_as_default, ForeignKey};

fn default_enabled() -> bool {
    true
}

/// A plugin instance attached to a route, service and/or consumer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginInformation {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub created_at: Option<f64>,

    #[serde(default)]
    pub route: Option<ForeignKey>,

    #[serde(default)]
    pub service: Option<ForeignKey>,

    #[serde(default)]
    pub consumer: Option<ForeignKey>,

    /// Plugin-specific settings, passed through untouched
    #[serde(default, deserialize_with = "null_as_default")]
    pub config: serde_json::Map<String, serde_json::Value>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub protocols: Vec<String>,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}
