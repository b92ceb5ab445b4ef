//! Arena-backed circular doubly-linked list.
//!
//! Nodes live in a single growable vector owned by [`LinkArena`]. Neighbors
//! are slot indices rather than pointers, so there is no ownership between
//! nodes at all: the arena owns every slot and removal just vacates one.

pub mod arena;
pub mod node;

pub use arena::{LinkArena, SENTINEL};
pub use node::Node;
