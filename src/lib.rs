#![cfg_attr(docsrs, feature(doc_cfg))]
//! # linkset
//!
//! linkset provides insertion-order-preserving sets with full set-algebra
//! semantics, plus a bounded variant that evicts its oldest entries. They
//! are building blocks for LRU-style caches, dedup buffers and ordered
//! membership tracking.
//!
//! ## Features
//! - [`OrderedSet`](set::OrderedSet): O(1) membership test, insert and delete with
//!   deterministic iteration order under mutation
//! - Head-inserting construction ([`DoubleSidedSet`](set::DoubleSidedSet)) where the newest key comes first
//! - Union, intersection, difference and symmetric difference, each with an
//!   in-place form and an operator form on references
//! - [`ExhaustiveSet`](bounded::ExhaustiveSet): capacity limit with oldest-first eviction
//!   and an optional per-key eviction hook
//! - [`Cursor`](set::Cursor) traversal that reports mutation of the set it walks
//!
//! ## Storage
//!
//! Keys live in an arena-backed circular list with a permanent sentinel slot;
//! neighbors are slot indices and a hash index maps each key to its slot.
//! Removing a key vacates its slot for reuse. No node owns another, so there
//! are no reference cycles to break.
//!
//! ## Usage
//!
//! ```rust
//! use linkset::prelude::*;
//!
//! let mut seen = ExhaustiveSet::new(2).unwrap();
//! seen.try_extend(["a", "b", "c"]).unwrap();
//! assert_eq!(seen.iter().copied().collect::<Vec<_>>(), vec!["c", "b"]);
//!
//! let a: OrderedSet<u32> = [1, 2, 3].into_iter().collect();
//! let b: OrderedSet<u32> = [3, 4].into_iter().collect();
//! assert_eq!((&a | &b).iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
//! ```

pub mod bounded;
pub mod bounds;
pub mod debug_invariants;
pub mod linkset_error;
pub mod list;
pub mod set;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::bounded::{EvictHook, EvictionConfig, ExhaustiveSet};
    pub use crate::bounds::KeyLike;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::linkset_error::LinkSetError;
    pub use crate::set::{Cursor, DoubleSidedSet, End, InsertAt, Membership, OrderedSet};
}
