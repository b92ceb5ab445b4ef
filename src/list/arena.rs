//! Circular list with a permanent sentinel at slot 0.
//!
//! Following `next` from the sentinel visits every live node front to back
//! and returns to the sentinel; `prev` walks back to front. Vacated slots go
//! on a free list and are reused by the next insertion.

use super::node::Node;
use crate::debug_invariants::{assert_valid, DebugInvariants};
use crate::linkset_error::LinkSetError;

/// Slot index of the sentinel node.
pub const SENTINEL: usize = 0;

#[derive(Clone, Debug)]
pub struct LinkArena<K> {
    nodes: Vec<Node<K>>,
    free: Vec<usize>,
    len: usize,
}

impl<K> Default for LinkArena<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> LinkArena<K> {
    /// Create an empty list holding only the sentinel.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(Node::sentinel(SENTINEL));
        Self {
            nodes,
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of live nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First live slot in forward order.
    #[inline]
    pub fn first(&self) -> Option<usize> {
        let slot = self.nodes[SENTINEL].next;
        (slot != SENTINEL).then_some(slot)
    }

    /// Last live slot in forward order.
    #[inline]
    pub fn last(&self) -> Option<usize> {
        let slot = self.nodes[SENTINEL].prev;
        (slot != SENTINEL).then_some(slot)
    }

    #[inline]
    pub fn node(&self, slot: usize) -> Option<&Node<K>> {
        self.nodes.get(slot)
    }

    /// Key stored at `slot`, if that slot is live.
    #[inline]
    pub fn key(&self, slot: usize) -> Option<&K> {
        self.nodes.get(slot).and_then(Node::key)
    }

    /// Successor of `slot`; the sentinel marks the end.
    #[inline]
    pub fn next_of(&self, slot: usize) -> usize {
        self.nodes[slot].next
    }

    /// Predecessor of `slot`; the sentinel marks the start.
    #[inline]
    pub fn prev_of(&self, slot: usize) -> usize {
        self.nodes[slot].prev
    }

    /// Append `key` just before the sentinel (becomes last).
    pub fn push_back(&mut self, key: K) -> usize {
        let last = self.nodes[SENTINEL].prev;
        self.insert_between(last, SENTINEL, key)
    }

    /// Prepend `key` just after the sentinel (becomes first).
    pub fn push_front(&mut self, key: K) -> usize {
        let first = self.nodes[SENTINEL].next;
        self.insert_between(SENTINEL, first, key)
    }

    /// Splice the node at `slot` out of the list and vacate the slot.
    ///
    /// Returns `None` for the sentinel or an already vacated slot.
    pub fn unlink(&mut self, slot: usize) -> Option<K> {
        if slot == SENTINEL {
            return None;
        }
        let node = self.nodes.get_mut(slot)?;
        let key = node.key.take()?;
        let (prev, next) = (node.prev, node.next);
        node.prev = slot;
        node.next = slot;

        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.free.push(slot);
        self.len -= 1;
        Some(key)
    }

    /// Drop every live node; the sentinel points at itself again.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[SENTINEL] = Node::sentinel(SENTINEL);
        self.free.clear();
        self.len = 0;
    }

    fn insert_between(&mut self, left: usize, right: usize, key: K) -> usize {
        debug_assert_eq!(self.nodes[left].next, right);
        let node = Node {
            key: Some(key),
            prev: left,
            next: right,
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        self.nodes[left].next = slot;
        self.nodes[right].prev = slot;
        self.len += 1;
        slot
    }
}

impl<K> DebugInvariants for LinkArena<K> {
    fn debug_assert_invariants(&self) {
        assert_valid(self, "LinkArena");
    }

    fn validate_invariants(&self) -> Result<(), LinkSetError> {
        if self.nodes[SENTINEL].is_live() {
            return Err(LinkSetError::InvariantViolation(
                "sentinel carries a key".into(),
            ));
        }
        let mut hops = 0usize;
        let mut cur = SENTINEL;
        loop {
            let next = self.nodes[cur].next;
            if next >= self.nodes.len() {
                return Err(LinkSetError::InvariantViolation(format!(
                    "slot {cur} links to out-of-range slot {next}"
                )));
            }
            if self.nodes[next].prev != cur {
                return Err(LinkSetError::InvariantViolation(format!(
                    "slot {next}.prev is {} but should be {cur}",
                    self.nodes[next].prev
                )));
            }
            if next == SENTINEL {
                break;
            }
            if !self.nodes[next].is_live() {
                return Err(LinkSetError::InvariantViolation(format!(
                    "vacated slot {next} is still linked"
                )));
            }
            hops += 1;
            if hops > self.len {
                return Err(LinkSetError::InvariantViolation(format!(
                    "list longer than its length {}",
                    self.len
                )));
            }
            cur = next;
        }
        if hops != self.len {
            return Err(LinkSetError::InvariantViolation(format!(
                "walked {hops} nodes but length is {}",
                self.len
            )));
        }
        if self.nodes.len() != self.len + self.free.len() + 1 {
            return Err(LinkSetError::InvariantViolation(format!(
                "{} slots != {} live + {} free + sentinel",
                self.nodes.len(),
                self.len,
                self.free.len()
            )));
        }
        if let Some(&slot) = self.free.iter().find(|&&s| self.nodes[s].is_live()) {
            return Err(LinkSetError::InvariantViolation(format!(
                "free slot {slot} still holds a key"
            )));
        }
        Ok(())
    }
}
