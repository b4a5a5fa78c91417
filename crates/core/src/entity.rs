//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Containers look entries up through `id()`, so two records with the same
/// identifier are the same entry even when their other fields differ.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
