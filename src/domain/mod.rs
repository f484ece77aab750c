//! # Gateway Resource Models
//!
//! Read-only snapshots of gateway state as returned by the admin API. Nothing here is
//! mutated locally; each value lives for the duration of one call.

pub mod page;
pub mod plugin;
pub mod route;
pub mod service;
pub mod target;
pub mod upstream;

pub use page::{Page, PluginList, RouteConfigurationList, TargetList};
pub use plugin::PluginInformation;
pub use route::RouteConfiguration;
pub use service::ServiceConfiguration;
pub use target::UpstreamTargetInformation;
pub use upstream::{
    ActiveHealthCheck, ActiveHealthy, ActiveUnhealthy, HashingInput, HealthChecks,
    LoadBalancingAlgorithm, PassiveHealthCheck, PassiveHealthy, PassiveUnhealthy,
    UpstreamConfiguration,
};

use serde::{Deserialize, Deserializer, Serialize};

/// Reference to another gateway entity, as embedded in responses (`{"id": "..."}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    pub id: String,
}

/// Decode JSON `null` as the type's default (the admin API sends `null` for empty lists)
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
