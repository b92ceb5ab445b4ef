//! The ordered-set engine: a [`LinkArena`] kept in lockstep with a
//! key -> slot index.
//!
//! Every mutation is O(1). Iteration order always reflects list order. The
//! engine is parameterized by [`InsertAt`], which picks the end new keys are
//! linked at; everything else is shared between the two directions.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use hashbrown::HashMap;
use itertools::Itertools;

use crate::bounds::KeyLike;
use crate::debug_invariants::{assert_valid, DebugInvariants};
use crate::linkset_error::LinkSetError;
use crate::list::LinkArena;

/// End at which [`OrderedSet::add`] links new keys.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum InsertAt {
    /// New keys become last in forward order.
    #[default]
    Tail,
    /// New keys become first in forward order.
    Head,
}

impl InsertAt {
    /// The end holding the oldest key for this direction.
    #[inline]
    pub fn oldest_end(self) -> End {
        match self {
            InsertAt::Tail => End::First,
            InsertAt::Head => End::Last,
        }
    }
}

/// End of forward iteration order targeted by a pop.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum End {
    #[default]
    Last,
    First,
}

/// Insertion-ordered set with O(1) membership, insert and delete.
#[derive(Clone)]
pub struct OrderedSet<K> {
    pub(crate) list: LinkArena<K>,
    index: HashMap<K, usize>,
    insert_at: InsertAt,
    epoch: u64,
}

impl<K: KeyLike> Default for OrderedSet<K> {
    fn default() -> Self {
        Self::with_direction(InsertAt::Tail)
    }
}

impl<K: KeyLike> OrderedSet<K> {
    /// Creates an empty tail-inserting set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set that links new keys at `insert_at`.
    pub fn with_direction(insert_at: InsertAt) -> Self {
        Self {
            list: LinkArena::new(),
            index: HashMap::new(),
            insert_at,
            epoch: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            list: LinkArena::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            insert_at: InsertAt::Tail,
            epoch: 0,
        }
    }

    /// Builds a set with the given direction from `keys`, skipping duplicates.
    pub fn from_keys<I>(insert_at: InsertAt, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut set = Self::with_direction(insert_at);
        set.extend(keys);
        set
    }

    /// An empty set with the same direction as `self`.
    pub(crate) fn empty_like(&self) -> Self {
        Self::with_direction(self.insert_at)
    }

    #[inline]
    pub fn direction(&self) -> InsertAt {
        self.insert_at
    }

    /// Count of live keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Mutation counter; bumped by every structural change.
    #[inline]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Inserts `key` at this set's insertion end.
    ///
    /// Returns `false` and leaves the set untouched if `key` is present.
    pub fn add(&mut self, key: K) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        let slot = match self.insert_at {
            InsertAt::Tail => self.list.push_back(key.clone()),
            InsertAt::Head => self.list.push_front(key.clone()),
        };
        self.index.insert(key, slot);
        self.bump();
        true
    }

    /// Appends an absent key at the tail regardless of direction, so derived
    /// sets keep their source's visible order.
    pub(crate) fn append_preserving(&mut self, key: K) {
        debug_assert!(!self.index.contains_key(&key));
        let slot = self.list.push_back(key.clone());
        self.index.insert(key, slot);
        self.bump();
    }

    /// Removes `key` if present. Returns whether it was present.
    pub fn discard<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.remove(key) {
            Some(slot) => {
                self.list.unlink(slot);
                self.bump();
                true
            }
            None => false,
        }
    }

    /// Same as [`discard`](Self::discard); absent keys are not an error.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.discard(key)
    }

    /// Removes and returns the last key in forward order.
    pub fn pop(&mut self) -> Result<K, LinkSetError> {
        self.pop_end(End::Last)
    }

    /// Removes and returns the first key in forward order.
    pub fn pop_first(&mut self) -> Result<K, LinkSetError> {
        self.pop_end(End::First)
    }

    /// Removes and returns the oldest key, i.e. the one at the end opposite
    /// to where this set links new keys.
    pub fn pop_oldest(&mut self) -> Result<K, LinkSetError> {
        self.pop_end(self.insert_at.oldest_end())
    }

    pub fn pop_end(&mut self, end: End) -> Result<K, LinkSetError> {
        let slot = match end {
            End::Last => self.list.last(),
            End::First => self.list.first(),
        }
        .ok_or(LinkSetError::EmptyCollection)?;
        let key = self.list.unlink(slot).ok_or_else(|| {
            LinkSetError::InvariantViolation(format!("end slot {slot} holds no key"))
        })?;
        self.index.remove(&key);
        self.bump();
        Ok(key)
    }

    /// First key in forward order.
    pub fn first(&self) -> Option<&K> {
        self.list.first().and_then(|slot| self.list.key(slot))
    }

    /// Last key in forward order.
    pub fn last(&self) -> Option<&K> {
        self.list.last().and_then(|slot| self.list.key(slot))
    }

    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        self.index.clear();
        self.list.clear();
        self.bump();
    }

    /// An independent set with the same keys, order and direction.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Keys in ascending `Ord` order, independent of insertion order.
    pub fn sorted_keys(&self) -> Vec<K> {
        self.iter().cloned().sorted().collect()
    }

    /// Debug text: `OrderedSet([1, 2])`, or `OrderedSet()` when empty.
    pub fn to_text(&self) -> String {
        format!("{self:?}")
    }

    pub(crate) fn tag(&self) -> &'static str {
        match self.insert_at {
            InsertAt::Tail => "OrderedSet",
            InsertAt::Head => "DoubleSidedSet",
        }
    }

    /// Shared `Debug` body, also used by wrappers with their own tag.
    pub(crate) fn fmt_tagged(&self, tag: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{tag}()");
        }
        write!(f, "{tag}(")?;
        f.debug_list().entries(self.iter()).finish()?;
        f.write_str(")")
    }

    #[inline]
    fn bump(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }
}

impl<K: KeyLike> fmt::Debug for OrderedSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tagged(self.tag(), f)
    }
}

/// Order-sensitive: equal length and identical key sequence. Direction is
/// not compared.
impl<K: KeyLike> PartialEq for OrderedSet<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: KeyLike> Eq for OrderedSet<K> {}

impl<K: KeyLike> FromIterator<K> for OrderedSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_keys(InsertAt::Tail, iter)
    }
}

impl<K: KeyLike> Extend<K> for OrderedSet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}

impl<'a, K: KeyLike> Extend<&'a K> for OrderedSet<K> {
    fn extend<I: IntoIterator<Item = &'a K>>(&mut self, iter: I) {
        for key in iter {
            if !self.contains(key) {
                self.add(key.clone());
            }
        }
    }
}

impl<K: KeyLike> DebugInvariants for OrderedSet<K> {
    fn debug_assert_invariants(&self) {
        assert_valid(self, "OrderedSet");
    }

    fn validate_invariants(&self) -> Result<(), LinkSetError> {
        self.list.validate_invariants()?;
        if self.index.len() != self.list.len() {
            return Err(LinkSetError::InvariantViolation(format!(
                "index holds {} keys but list holds {}",
                self.index.len(),
                self.list.len()
            )));
        }
        for (key, &slot) in &self.index {
            if self.list.key(slot) != Some(key) {
                return Err(LinkSetError::InvariantViolation(format!(
                    "key {key:?} indexed at slot {slot} which holds {:?}",
                    self.list.key(slot)
                )));
            }
        }
        Ok(())
    }
}
