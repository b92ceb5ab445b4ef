//! Capacity-bounded sets.
//!
//! [`ExhaustiveSet`] wraps a head-inserting [`OrderedSet`](crate::set::OrderedSet)
//! and evicts the oldest keys whenever an insertion brings it to its limit.
//! Eviction is by insertion age only; lookups do not refresh a key.

pub mod config;
pub mod exhaustive;

pub use config::{EvictionConfig, DEFAULT_LIMIT};
pub use exhaustive::{EvictHook, ExhaustiveSet};
