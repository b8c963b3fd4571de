//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Every record stored in a [`crate::Repository`] has a strongly-typed,
/// cheaply copyable identifier. Ids are ordered so listings are
/// deterministic.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Ord + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// Records that carry a mutable stock/quantity figure.
///
/// Implemented by inventory items; unlocks
/// [`crate::Repository::update_quantity`].
pub trait Quantified {
    /// Current stored quantity. Non-negative by invariant.
    fn quantity(&self) -> i64;

    /// Overwrite the stored quantity. Callers validate non-negativity first.
    fn set_quantity(&mut self, quantity: i64);
}
