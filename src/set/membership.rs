//! Containment capability for the difference-style operations.

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

use super::ordered::OrderedSet;
use crate::bounds::KeyLike;

/// A collection that can answer "is `key` in you?".
///
/// Hashed and tree sets answer in O(1)/O(log n); slices and vectors scan.
pub trait Membership<K> {
    fn contains_key(&self, key: &K) -> bool;
}

impl<K: KeyLike> Membership<K> for OrderedSet<K> {
    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        self.contains(key)
    }
}

impl<K: Eq + Hash, S: BuildHasher> Membership<K> for HashSet<K, S> {
    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        self.contains(key)
    }
}

impl<K: Eq + Hash, S: BuildHasher> Membership<K> for hashbrown::HashSet<K, S> {
    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        self.contains(key)
    }
}

impl<K: Ord> Membership<K> for BTreeSet<K> {
    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        self.contains(key)
    }
}

impl<K: PartialEq> Membership<K> for [K] {
    fn contains_key(&self, key: &K) -> bool {
        self.contains(key)
    }
}

impl<K: PartialEq> Membership<K> for Vec<K> {
    fn contains_key(&self, key: &K) -> bool {
        self.as_slice().contains(key)
    }
}

impl<K, M: Membership<K> + ?Sized> Membership<K> for &M {
    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        (**self).contains_key(key)
    }
}
