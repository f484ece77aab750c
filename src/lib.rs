//! # kong-access
//!
//! Typed client for the administrative REST API of a Kong-style API gateway.
//!
//! The crate covers the resources needed to publish a backend through the gateway:
//! upstreams (load-balanced pools) and their targets, services, routes attached to
//! services, and plugins attached to services.
//!
//! ## Architecture
//!
//! ```text
//! Operations (upstreams, targets, services, routes, plugins)
//!      ↓
//! KongClient (validate → send → classify status → decode)
//!      ↓
//! reqwest → gateway admin API
//! ```
//!
//! Every operation validates its arguments before touching the network, performs
//! one request (plus one read-back for operations whose result is verified) and
//! maps the HTTP status to a typed [`KongError`].
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use kong_access::{KongClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = KongClient::connect("localhost", 8001, false)?;
//!
//!     if !client.is_upstream_set_up("billing").await? {
//!         client.create_upstream("billing").await?;
//!     }
//!     client.create_upstream_target("billing", "10.0.0.5:8000").await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod errors;
pub mod observability;
pub mod operations;

// Re-export commonly used types
pub use client::KongClient;
pub use config::{ClientConfig, ConnectionSettings, DEFAULT_ADMIN_PORT};
pub use domain::{
    HashingInput, LoadBalancingAlgorithm, Page, PluginInformation, PluginList, RouteConfiguration,
    RouteConfigurationList, ServiceConfiguration, TargetList, UpstreamConfiguration,
    UpstreamTargetInformation,
};
pub use errors::{ErrorKind, KongError, Result};
pub use observability::init_logging;

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
