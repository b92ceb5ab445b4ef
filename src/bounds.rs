//! Common bound aliases used across set code.
//!
//! The trait has a blanket impl, so any type satisfying the underlying
//! bounds automatically implements it. It only reduces duplication in
//! `where` clauses.

/// Canonical bound set for set keys.
///
/// - `Clone` so a key can live in both the index and its node
/// - `Eq + Hash` for the key -> slot index
/// - `Ord` for deterministic snapshots ([`sorted_keys`](crate::set::OrderedSet::sorted_keys))
/// - `Debug` for diagnostics and invariant checks
pub trait KeyLike: Clone + Eq + std::hash::Hash + Ord + std::fmt::Debug {}
impl<T> KeyLike for T where T: Clone + Eq + std::hash::Hash + Ord + std::fmt::Debug {}
