//! # Error Handling
//!
//! Every operation returns a [`KongError`] on failure. Existence checks are the one
//! place a 404 is not an error: they report `Ok(false)` instead.

pub mod types;

pub use types::{ErrorKind, KongError, Result};
