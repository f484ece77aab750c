//! Paged collection responses
//!
//! Collection endpoints answer `{"data": [...], "next": cursor}`. Only the first page
//! is ever requested; `next` is surfaced so callers can tell the list was truncated.

use serde::{Deserialize, Serialize};

use super::{null_as_default, PluginInformation, RouteConfiguration, UpstreamTargetInformation};

/// One page of a collection endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<T>,

    /// Cursor of the following page; never followed by this client
    #[serde(default)]
    pub next: Option<String>,
}

impl<T> Page<T> {
    /// Whether the gateway reported more entries than this page holds
    pub fn has_more(&self) -> bool {
        self.next.as_deref().is_some_and(|next| !next.is_empty())
    }
}

pub type TargetList = Page<UpstreamTargetInformation>;
pub type RouteConfigurationList = Page<RouteConfiguration>;
pub type PluginList = Page<PluginInformation>;
