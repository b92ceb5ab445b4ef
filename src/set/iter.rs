//! Traversal over an [`OrderedSet`].
//!
//! [`Iter`] borrows the set, so the borrow checker already rules out
//! mutation while it is alive. [`Cursor`] is the detached form: it holds only
//! a slot position and the epoch it started at, and each step re-borrows the
//! set. A step taken after the set changed fails with
//! [`LinkSetError::ConcurrentModification`].

use std::iter::FusedIterator;

use super::ordered::OrderedSet;
use crate::bounds::KeyLike;
use crate::linkset_error::LinkSetError;
use crate::list::{LinkArena, SENTINEL};

/// Borrowing iterator over keys in forward order; `.rev()` walks backward.
pub struct Iter<'a, K> {
    list: &'a LinkArena<K>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(list: &'a LinkArena<K>) -> Self {
        Self {
            list,
            front: list.next_of(SENTINEL),
            back: list.prev_of(SENTINEL),
            remaining: list.len(),
        }
    }
}

impl<'a, K> Clone for Iter<'a, K> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.list.key(self.front)?;
        self.front = self.list.next_of(self.front);
        self.remaining -= 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K> DoubleEndedIterator for Iter<'a, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.list.key(self.back)?;
        self.back = self.list.prev_of(self.back);
        self.remaining -= 1;
        Some(key)
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
impl<K> FusedIterator for Iter<'_, K> {}

/// Owning iterator; yields keys front to back.
pub struct IntoIter<K: KeyLike> {
    set: OrderedSet<K>,
}

impl<K: KeyLike> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.set.pop_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.set.len(), Some(self.set.len()))
    }
}

impl<K: KeyLike> DoubleEndedIterator for IntoIter<K> {
    fn next_back(&mut self) -> Option<K> {
        self.set.pop().ok()
    }
}

impl<K: KeyLike> ExactSizeIterator for IntoIter<K> {}
impl<K: KeyLike> FusedIterator for IntoIter<K> {}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Heading {
    Forward,
    Backward,
}

/// Detached traversal handle that detects mutation of the set it walks.
#[derive(Clone, Debug)]
pub struct Cursor {
    slot: usize,
    epoch: u64,
    heading: Heading,
    finished: bool,
}

impl Cursor {
    /// Advance one key. Returns `Ok(None)` once the sentinel is reached; a
    /// finished cursor keeps returning `Ok(None)`.
    pub fn advance<'s, K: KeyLike>(
        &mut self,
        set: &'s OrderedSet<K>,
    ) -> Result<Option<&'s K>, LinkSetError> {
        if self.finished {
            return Ok(None);
        }
        if set.epoch() != self.epoch {
            return Err(LinkSetError::ConcurrentModification {
                expected: self.epoch,
                found: set.epoch(),
            });
        }
        // A slot missing or vacant in `set` means the cursor came from another set.
        let node = match set.list.node(self.slot) {
            Some(node) if self.slot == SENTINEL || node.is_live() => node,
            _ => {
                return Err(LinkSetError::ConcurrentModification {
                    expected: self.epoch,
                    found: set.epoch(),
                });
            }
        };
        let step = match self.heading {
            Heading::Forward => node.next(),
            Heading::Backward => node.prev(),
        };
        if step == SENTINEL {
            self.finished = true;
            return Ok(None);
        }
        self.slot = step;
        Ok(set.list.key(step))
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl<K: KeyLike> OrderedSet<K> {
    /// Keys in forward order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.list)
    }

    /// A fresh forward cursor pinned to the current epoch.
    pub fn cursor(&self) -> Cursor {
        self.cursor_heading(Heading::Forward)
    }

    /// A fresh backward cursor pinned to the current epoch.
    pub fn cursor_rev(&self) -> Cursor {
        self.cursor_heading(Heading::Backward)
    }

    fn cursor_heading(&self, heading: Heading) -> Cursor {
        Cursor {
            slot: SENTINEL,
            epoch: self.epoch(),
            heading,
            finished: false,
        }
    }
}

impl<'a, K: KeyLike> IntoIterator for &'a OrderedSet<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: KeyLike> IntoIterator for OrderedSet<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { set: self }
    }
}
