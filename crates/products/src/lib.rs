//! Products domain module.
//!
//! Catalog records as the remote catalog service exposes them, plus the
//! create/update payload with its required-field checks. Pure data, no IO.

pub mod draft;
pub mod product;

pub use draft::ProductDraft;
pub use product::{Product, ProductId, Rating};
