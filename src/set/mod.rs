//! Insertion-ordered sets.
//!
//! [`OrderedSet`] is the single engine: a circular linked list of keys in an
//! arena plus a key -> slot index. [`DoubleSidedSet`] wraps the same engine
//! linking new keys at the head. The set algebra, iterators and operators
//! live in sibling modules and are shared by both directions.

pub mod algebra;
pub mod double_sided;
pub mod iter;
pub mod membership;
pub mod ops;
pub mod ordered;

pub use double_sided::DoubleSidedSet;
pub use iter::{Cursor, IntoIter, Iter};
pub use membership::Membership;
pub use ordered::{End, InsertAt, OrderedSet};

#[cfg(test)]
mod tests;
