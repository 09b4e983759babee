//! Tracing/logging setup shared by storefront binaries.
//!
//! Library crates only emit `tracing` events; binaries call [`init`] once at
//! startup to install a subscriber.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::{LogFormat, init, init_with};
