//! Entity trait: identity that survives edits.

/// Entity marker + minimal interface.
///
/// Catalog records are replaced wholesale on update; two records with the same
/// `id()` describe the same product.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
