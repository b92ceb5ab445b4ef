//! Head-inserting construction of the ordered-set engine.
//!
//! The newest key is first in forward order, so the oldest keys drift to
//! the tail and [`OrderedSet::pop`] removes the oldest one.

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::iter::{IntoIter, Iter};
use super::membership::Membership;
use super::ordered::{InsertAt, OrderedSet};
use crate::bounds::KeyLike;

/// An [`OrderedSet`] that links new keys at the head.
///
/// Every constructor, including `Default` and `collect()`, builds a
/// head-inserting engine. All queries, mutations and set algebra come
/// through `Deref`/`DerefMut`; derived sets keep the head direction.
#[derive(Clone, PartialEq, Eq)]
pub struct DoubleSidedSet<K: KeyLike> {
    inner: OrderedSet<K>,
}

impl<K: KeyLike> Default for DoubleSidedSet<K> {
    fn default() -> Self {
        Self {
            inner: OrderedSet::with_direction(InsertAt::Head),
        }
    }
}

impl<K: KeyLike> DoubleSidedSet<K> {
    /// Creates an empty head-inserting set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Unwraps the engine; it keeps inserting at the head.
    pub fn into_inner(self) -> OrderedSet<K> {
        self.inner
    }
}

impl<K: KeyLike> OrderedSet<K> {
    #[inline]
    pub fn is_double_sided(&self) -> bool {
        self.direction() == InsertAt::Head
    }
}

impl<K: KeyLike> Deref for DoubleSidedSet<K> {
    type Target = OrderedSet<K>;

    fn deref(&self) -> &OrderedSet<K> {
        &self.inner
    }
}

impl<K: KeyLike> DerefMut for DoubleSidedSet<K> {
    fn deref_mut(&mut self) -> &mut OrderedSet<K> {
        &mut self.inner
    }
}

impl<K: KeyLike> fmt::Debug for DoubleSidedSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl<K: KeyLike> PartialEq<OrderedSet<K>> for DoubleSidedSet<K> {
    fn eq(&self, other: &OrderedSet<K>) -> bool {
        self.inner == *other
    }
}

impl<K: KeyLike> FromIterator<K> for DoubleSidedSet<K> {
    /// The last new key ends up first.
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            inner: OrderedSet::from_keys(InsertAt::Head, iter),
        }
    }
}

impl<K: KeyLike> Extend<K> for DoubleSidedSet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<'a, K: KeyLike> Extend<&'a K> for DoubleSidedSet<K> {
    fn extend<I: IntoIterator<Item = &'a K>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<K: KeyLike> Membership<K> for DoubleSidedSet<K> {
    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        self.inner.contains(key)
    }
}

impl<'a, K: KeyLike> IntoIterator for &'a DoubleSidedSet<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<K: KeyLike> IntoIterator for DoubleSidedSet<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}
