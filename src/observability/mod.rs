//! # Observability
//!
//! Logging setup for binaries embedding the client. The library itself only emits
//! `tracing` events and spans; installing a subscriber is left to the caller.

pub mod logging;

pub use logging::{init_logging, init_logging_with_format, LogFormat};
