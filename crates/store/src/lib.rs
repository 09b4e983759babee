//! `storefront-store`
//!
//! **Responsibility:** in-memory catalog state for one session.
//!
//! - Holds the authoritative product list fetched from the remote catalog.
//! - Derives the search/category filtered view shown in the product list.
//! - Recomputes analytics whenever the authoritative list changes (never on
//!   filter changes; analytics always describe the full catalog).

pub mod catalog;
pub mod filter;

pub use catalog::{CatalogStore, CategoryOption};
pub use filter::ProductFilter;
