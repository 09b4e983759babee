//! `storefront-client`
//!
//! **Responsibility:** talk to the remote catalog service.
//!
//! - [`CatalogClient`]: four thin calls (`GET/POST/PUT/DELETE /products`).
//! - [`CatalogService`]: runs a call and, on success, applies the result to a
//!   [`storefront_store::CatalogStore`].
//!
//! Transport failures are reported to the caller; nothing is retried.

pub mod client;
pub mod config;
pub mod error;
pub mod service;

pub use client::CatalogClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use service::CatalogService;
