//! Bounded, insertion-age evicting set.
//!
//! New keys are linked at the head of the inner set, so the oldest key is
//! always last in forward order. When an insertion brings the size to or
//! over the limit, keys are popped from the tail until exactly `limit`
//! remain, and each one is handed to the optional eviction hook.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::ops::Deref;

use super::config::EvictionConfig;
use crate::bounds::KeyLike;
use crate::debug_invariants::{assert_valid, DebugInvariants};
use crate::linkset_error::{HookError, LinkSetError};
use crate::set::{InsertAt, Membership, OrderedSet};

/// Callback run once per evicted key, oldest first. An `Err` aborts the
/// eviction pass and is returned from the triggering call.
pub type EvictHook<K> = Box<dyn FnMut(K) -> Result<(), HookError>>;

pub struct ExhaustiveSet<K: KeyLike> {
    inner: OrderedSet<K>,
    limit: usize,
    on_evict: Option<EvictHook<K>>,
}

impl<K: KeyLike> Default for ExhaustiveSet<K> {
    fn default() -> Self {
        Self {
            inner: OrderedSet::with_direction(InsertAt::Head),
            limit: EvictionConfig::default().limit,
            on_evict: None,
        }
    }
}

impl<K: KeyLike> ExhaustiveSet<K> {
    /// Empty set holding at most `limit` keys; evicted keys are dropped.
    pub fn new(limit: usize) -> Result<Self, LinkSetError> {
        Self::with_config(EvictionConfig::with_limit(limit))
    }

    pub fn with_config(config: EvictionConfig) -> Result<Self, LinkSetError> {
        config.validate()?;
        Ok(Self {
            limit: config.limit,
            ..Self::default()
        })
    }

    /// Like [`with_config`](Self::with_config), handing each evicted key
    /// to `hook`.
    pub fn with_hook<F>(config: EvictionConfig, hook: F) -> Result<Self, LinkSetError>
    where
        F: FnMut(K) -> Result<(), HookError> + 'static,
    {
        let mut set = Self::with_config(config)?;
        set.on_evict = Some(Box::new(hook));
        Ok(set)
    }

    /// Builds a set from `keys`, evicting as it goes.
    pub fn from_keys<I>(config: EvictionConfig, keys: I) -> Result<Self, LinkSetError>
    where
        I: IntoIterator<Item = K>,
    {
        let mut set = Self::with_config(config)?;
        set.try_extend(keys)?;
        Ok(set)
    }

    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[inline]
    pub fn has_hook(&self) -> bool {
        self.on_evict.is_some()
    }

    /// Read-only view of the underlying head-inserting set.
    #[inline]
    pub fn as_set(&self) -> &OrderedSet<K> {
        &self.inner
    }

    /// Unwraps the keys, dropping the limit and hook.
    pub fn into_inner(self) -> OrderedSet<K> {
        self.inner
    }

    /// Inserts `key` and enforces the limit.
    ///
    /// Returns `Ok(false)` without touching the set if `key` is present.
    pub fn add(&mut self, key: K) -> Result<bool, LinkSetError> {
        if !self.inner.add(key) {
            return Ok(false);
        }
        if self.inner.len() >= self.limit {
            self.evict(self.inner.len() - self.limit)?;
        }
        Ok(true)
    }

    /// Adds every key in order, stopping at the first hook failure.
    pub fn try_extend<I>(&mut self, keys: I) -> Result<(), LinkSetError>
    where
        I: IntoIterator<Item = K>,
    {
        for key in keys {
            self.add(key)?;
        }
        Ok(())
    }

    /// Changes the limit; shrinking below the current size evicts at once.
    pub fn set_limit(&mut self, limit: usize) -> Result<(), LinkSetError> {
        EvictionConfig::with_limit(limit).validate()?;
        self.limit = limit;
        if self.inner.len() > limit {
            self.evict(self.inner.len() - limit)?;
        }
        Ok(())
    }

    pub fn discard<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.discard(key)
    }

    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.discard(key)
    }

    /// Removes and returns the oldest key. The hook is not called.
    pub fn pop(&mut self) -> Result<K, LinkSetError> {
        self.inner.pop_oldest()
    }

    /// Removes and returns the newest key.
    pub fn pop_newest(&mut self) -> Result<K, LinkSetError> {
        self.inner.pop_first()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// In-place union; every new key goes through [`add`](Self::add).
    pub fn update<I>(&mut self, others: I) -> Result<(), LinkSetError>
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: Borrow<K>,
    {
        for other in others {
            for key in other {
                let key: &K = key.borrow();
                if !self.inner.contains(key) {
                    self.add(key.clone())?;
                }
            }
        }
        Ok(())
    }

    pub fn difference_update<J>(&mut self, other: J)
    where
        J: IntoIterator,
        J::Item: Borrow<K>,
    {
        self.inner.difference_update(other);
    }

    pub fn intersection_update<'m, I, M>(&mut self, others: I)
    where
        I: IntoIterator<Item = &'m M>,
        M: Membership<K> + ?Sized + 'm,
    {
        self.inner.intersection_update(others);
    }

    /// Adds `other`'s missing keys (with eviction), then drops the keys the
    /// two sides shared.
    pub fn symmetric_difference_update<J>(&mut self, other: J) -> Result<(), LinkSetError>
    where
        J: IntoIterator,
        J::Item: Borrow<K>,
    {
        let other: OrderedSet<K> = other
            .into_iter()
            .map(|k| Borrow::<K>::borrow(&k).clone())
            .collect();
        let shared: Vec<K> = self
            .inner
            .iter()
            .filter(|&key| other.contains(key))
            .cloned()
            .collect();
        for key in other {
            if !self.inner.contains(&key) {
                self.add(key)?;
            }
        }
        for key in &shared {
            self.inner.discard(key);
        }
        Ok(())
    }

    /// An independent copy with the same keys and limit but no hook.
    pub fn copy(&self) -> Self {
        Self {
            inner: self.inner.copy(),
            limit: self.limit,
            on_evict: None,
        }
    }

    pub fn to_text(&self) -> String {
        format!("{self:?}")
    }

    fn evict(&mut self, count: usize) -> Result<(), LinkSetError> {
        if count == 0 {
            return Ok(());
        }
        log::debug!(
            "evicting {count} oldest keys (size {}, limit {})",
            self.inner.len(),
            self.limit
        );
        for _ in 0..count {
            let key = self.inner.pop_oldest()?;
            log::trace!("evicted {key:?}");
            if let Some(hook) = self.on_evict.as_mut() {
                hook(key).map_err(|e| {
                    log::warn!("eviction hook failed: {e}");
                    LinkSetError::EvictHook(e)
                })?;
            }
        }
        debug_assert!(self.inner.len() <= self.limit);
        crate::strict_invariants!(&*self, "ExhaustiveSet::evict");
        Ok(())
    }
}

impl<K: KeyLike> Deref for ExhaustiveSet<K> {
    type Target = OrderedSet<K>;

    fn deref(&self) -> &OrderedSet<K> {
        &self.inner
    }
}

impl<K: KeyLike> fmt::Debug for ExhaustiveSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt_tagged("ExhaustiveSet", f)
    }
}

impl<K: KeyLike> PartialEq for ExhaustiveSet<K> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K: KeyLike> PartialEq<OrderedSet<K>> for ExhaustiveSet<K> {
    fn eq(&self, other: &OrderedSet<K>) -> bool {
        self.inner == *other
    }
}

impl<K: KeyLike> Membership<K> for ExhaustiveSet<K> {
    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        self.inner.contains(key)
    }
}

impl<'a, K: KeyLike> IntoIterator for &'a ExhaustiveSet<K> {
    type Item = &'a K;
    type IntoIter = crate::set::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<K: KeyLike> DebugInvariants for ExhaustiveSet<K> {
    fn debug_assert_invariants(&self) {
        assert_valid(self, "ExhaustiveSet");
    }

    fn validate_invariants(&self) -> Result<(), LinkSetError> {
        self.inner.validate_invariants()?;
        if self.limit == 0 {
            return Err(LinkSetError::InvariantViolation("zero limit".into()));
        }
        if self.inner.direction() != InsertAt::Head {
            return Err(LinkSetError::InvariantViolation(
                "bounded set must insert at head".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn keys(set: &ExhaustiveSet<u32>) -> Vec<u32> {
        set.iter().copied().collect()
    }

    #[test]
    fn settles_at_limit() {
        let s = ExhaustiveSet::from_keys(EvictionConfig::with_limit(100), 0..10_000u32).unwrap();
        assert_eq!(s.len(), 100);
        assert!((0..9900u32).all(|k| !s.contains(&k)));
        assert!((9900..10_000u32).all(|k| s.contains(&k)));
        assert_eq!(s.first(), Some(&9999));
        assert_eq!(s.last(), Some(&9900));
        s.validate_invariants().unwrap();
    }

    #[test]
    fn default_limit_is_one_thousand() {
        let mut s = ExhaustiveSet::default();
        s.try_extend(0..1500u32).unwrap();
        assert_eq!(s.limit(), 1000);
        assert_eq!(s.len(), 1000);
    }

    #[test]
    fn duplicate_add_neither_inserts_nor_evicts() {
        let mut s = ExhaustiveSet::new(3).unwrap();
        s.try_extend([1u32, 2, 3]).unwrap();
        assert_eq!(keys(&s), vec![3, 2, 1]);
        assert!(!s.add(2).unwrap());
        assert_eq!(keys(&s), vec![3, 2, 1]);
        assert!(s.add(4).unwrap());
        assert_eq!(keys(&s), vec![4, 3, 2]);
    }

    #[test]
    fn hook_sees_evictions_oldest_first() {
        let evicted = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&evicted);
        let mut s = ExhaustiveSet::with_hook(EvictionConfig::with_limit(2), move |k: u32| {
            sink.borrow_mut().push(k);
            Ok(())
        })
        .unwrap();
        s.try_extend(0..5).unwrap();
        assert_eq!(*RefCell::borrow(&evicted), vec![0, 1, 2]);
        assert_eq!(keys(&s), vec![4, 3]);
    }

    #[test]
    fn hook_failure_propagates() {
        let mut s = ExhaustiveSet::with_hook(EvictionConfig::with_limit(1), |k: u32| {
            if k == 1 {
                Err("refused".into())
            } else {
                Ok(())
            }
        })
        .unwrap();
        s.add(0).unwrap();
        s.add(1).unwrap();
        let err = s.add(2).unwrap_err();
        assert!(matches!(err, LinkSetError::EvictHook(_)));
        assert_eq!(err.to_string(), "eviction hook failed: refused");
        // the key handed to the failing hook is already gone
        assert_eq!(keys(&s), vec![2]);
        assert!(s.add(3).unwrap());
    }

    #[test]
    fn zero_limit_is_a_precondition_violation() {
        assert!(matches!(
            ExhaustiveSet::<u32>::new(0),
            Err(LinkSetError::PreconditionViolation(_))
        ));
        let mut s = ExhaustiveSet::<u32>::new(4).unwrap();
        assert!(s.set_limit(0).is_err());
        assert_eq!(s.limit(), 4);
    }

    #[test]
    fn shrinking_limit_evicts_immediately() {
        let mut s = ExhaustiveSet::from_keys(EvictionConfig::with_limit(10), 0..10u32).unwrap();
        s.set_limit(3).unwrap();
        assert_eq!(keys(&s), vec![9, 8, 7]);
    }

    #[test]
    fn pop_takes_oldest_and_newest() {
        let mut s = ExhaustiveSet::from_keys(EvictionConfig::with_limit(10), 0..5u32).unwrap();
        assert_eq!(s.pop().unwrap(), 0);
        assert_eq!(s.pop_newest().unwrap(), 4);
        s.clear();
        assert!(matches!(s.pop(), Err(LinkSetError::EmptyCollection)));
    }

    #[test]
    fn update_goes_through_eviction() {
        let mut s = ExhaustiveSet::new(3).unwrap();
        s.update([vec![1u32, 2], vec![3, 4, 5]]).unwrap();
        assert_eq!(keys(&s), vec![5, 4, 3]);
    }

    #[test]
    fn in_place_algebra() {
        let mut s = ExhaustiveSet::from_keys(EvictionConfig::with_limit(10), 0..6u32).unwrap();
        s.difference_update([0, 1]);
        assert_eq!(keys(&s), vec![5, 4, 3, 2]);
        let keep = vec![2u32, 3, 4];
        s.intersection_update([&keep]);
        assert_eq!(keys(&s), vec![4, 3, 2]);
        s.symmetric_difference_update([2, 7]).unwrap();
        assert_eq!(keys(&s), vec![7, 4, 3]);
        s.validate_invariants().unwrap();
    }

    #[test]
    fn read_only_algebra_through_deref() {
        let s = ExhaustiveSet::from_keys(EvictionConfig::with_limit(10), 0..4u32).unwrap();
        let other = OrderedSet::from_iter([3u32, 9]);
        assert!(s.issuperset([1u32, 2]));
        assert_eq!(s.difference([&other]).iter().copied().collect::<Vec<_>>(), vec![2, 1, 0]);
        assert!(other.intersection([&s]).contains(&3));
    }

    #[test]
    fn copy_drops_hook_but_keeps_limit() {
        let s = ExhaustiveSet::with_hook(EvictionConfig::with_limit(5), |_k: u32| Ok(())).unwrap();
        let mut c = s.copy();
        assert!(s.has_hook());
        assert!(!c.has_hook());
        c.try_extend(0..9).unwrap();
        assert_eq!(c.len(), 5);
        assert!(s.is_empty());
    }

    #[test]
    fn text_and_equality() {
        let s = ExhaustiveSet::from_keys(EvictionConfig::with_limit(3), [1u32, 2]).unwrap();
        assert_eq!(s.to_text(), "ExhaustiveSet([2, 1])");
        assert_eq!(ExhaustiveSet::<u32>::default().to_text(), "ExhaustiveSet()");
        assert_eq!(s, OrderedSet::from_iter([2u32, 1]));
        assert_eq!(s, s.copy());
    }
}
