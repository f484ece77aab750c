//! # Gateway Operations
//!
//! Public operations of [`KongClient`](crate::KongClient), grouped by resource.
//!
//! Every operation runs the same steps:
//!
//! ```text
//! connection configured? → parameters non-blank? → request → classify status → decode / verify
//! ```
//!
//! Parameter checks run before any network call. Composite checks (`service_has_*`,
//! `is_address_in_upstream_target_list`) are built on the read operations and re-fetch
//! from the gateway every time.
//!
//! Creations of routes and plugins and updates of a service host are verified by
//! reading the resource back, because the gateway acknowledging a mutation does not
//! guarantee the change is visible yet.

pub mod plugins;
pub mod routes;
pub mod services;
pub mod targets;
pub mod upstreams;
