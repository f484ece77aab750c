//! Route domain types
//!
//! A route binds incoming requests (by path, host, method) to a service.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::{null_as_default, ForeignKey};

/// Route configuration as stored in the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfiguration {
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub created_at: Option<f64>,

    #[serde(default)]
    pub updated_at: Option<f64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub protocols: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub methods: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub hosts: Vec<String>,

    /// Path prefixes in the order the gateway returned them
    #[serde(default, deserialize_with = "null_as_default")]
    pub paths: Vec<String>,

    /// Header name to accepted values
    #[serde(default, deserialize_with = "header_map")]
    pub headers: BTreeMap<String, Vec<String>>,

    #[serde(default)]
    pub https_redirect_status_code: Option<u16>,

    #[serde(default)]
    pub regex_priority: i64,

    #[serde(default)]
    pub strip_path: bool,

    #[serde(default)]
    pub path_handling: Option<String>,

    #[serde(default)]
    pub preserve_host: bool,

    #[serde(default)]
    pub request_buffering: bool,

    #[serde(default)]
    pub response_buffering: bool,

    #[serde(default)]
    pub service: Option<ForeignKey>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl RouteConfiguration {
    /// Whether `path` is one of this route's paths (exact match)
    pub fn has_path(&self, path: &str) -> bool {
        self.paths.iter().any(|candidate| candidate == path)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HeaderValues {
    One(String),
    Many(Vec<String>),
}

/// Accepts `{"x-a": "v"}` as well as the gateway's `{"x-a": ["v"]}`
fn header_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, HeaderValues>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(name, values)| match values {
            HeaderValues::One(value) => (name, vec![value]),
            HeaderValues::Many(values) => (name, values),
        })
        .collect())
}
