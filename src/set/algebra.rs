//! Set algebra over [`OrderedSet`].
//!
//! Derived sets keep `self`'s direction. Keys taken from `self` keep
//! `self`'s visible order; keys contributed by other arguments are added
//! through [`OrderedSet::add`], so they land at the set's insertion end.

use std::borrow::Borrow;

use super::membership::Membership;
use super::ordered::OrderedSet;
use crate::bounds::KeyLike;

impl<K: KeyLike> OrderedSet<K> {
    /// `self`'s keys followed by every new key of each argument, in the
    /// order encountered.
    pub fn union<I>(&self, others: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: Borrow<K>,
    {
        let mut out = self.copy();
        out.update(others);
        out
    }

    /// In-place [`union`](Self::union).
    pub fn update<I>(&mut self, others: I)
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: Borrow<K>,
    {
        for other in others {
            for key in other {
                let key: &K = key.borrow();
                if !self.contains(key) {
                    self.add(key.clone());
                }
            }
        }
        crate::strict_invariants!(&*self, "OrderedSet::update");
    }

    /// True iff every element of `other` is in `self`.
    pub fn issuperset<J>(&self, other: J) -> bool
    where
        J: IntoIterator,
        J::Item: Borrow<K>,
    {
        other
            .into_iter()
            .all(|key| self.contains(Borrow::<K>::borrow(&key)))
    }

    /// True iff every element of `self` is in `other`.
    pub fn issubset<M>(&self, other: &M) -> bool
    where
        M: Membership<K> + ?Sized,
    {
        self.iter().all(|key| other.contains_key(key))
    }

    /// True iff `self` and `other` share no element.
    pub fn is_disjoint<J>(&self, other: J) -> bool
    where
        J: IntoIterator,
        J::Item: Borrow<K>,
    {
        !other
            .into_iter()
            .any(|key| self.contains(Borrow::<K>::borrow(&key)))
    }

    /// True iff `self` and `other` share at least one element.
    pub fn overlaps<J>(&self, other: J) -> bool
    where
        J: IntoIterator,
        J::Item: Borrow<K>,
    {
        !self.is_disjoint(other)
    }

    /// `self`'s keys found in none of `others`, in `self`'s order.
    pub fn difference<'m, I, M>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'m M>,
        M: Membership<K> + ?Sized + 'm,
    {
        let others: Vec<&M> = others.into_iter().collect();
        self.select(|key| !others.iter().any(|other| other.contains_key(key)))
    }

    /// Removes every key of `self` that appears in `other`.
    pub fn difference_update<J>(&mut self, other: J)
    where
        J: IntoIterator,
        J::Item: Borrow<K>,
    {
        for key in other {
            self.discard(Borrow::<K>::borrow(&key));
        }
        crate::strict_invariants!(&*self, "OrderedSet::difference_update");
    }

    /// `self`'s keys present in every one of `others`, in `self`'s order.
    ///
    /// With no arguments the result is a copy of `self`.
    pub fn intersection<'m, I, M>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'m M>,
        M: Membership<K> + ?Sized + 'm,
    {
        let others: Vec<&M> = others.into_iter().collect();
        self.select(|key| others.iter().all(|other| other.contains_key(key)))
    }

    /// Keeps only the keys of `self` present in every one of `others`.
    pub fn intersection_update<'m, I, M>(&mut self, others: I)
    where
        I: IntoIterator<Item = &'m M>,
        M: Membership<K> + ?Sized + 'm,
    {
        let others: Vec<&M> = others.into_iter().collect();
        let doomed: Vec<K> = self
            .iter()
            .filter(|&key| !others.iter().all(|other| other.contains_key(key)))
            .cloned()
            .collect();
        for key in &doomed {
            self.discard(key);
        }
        crate::strict_invariants!(&*self, "OrderedSet::intersection_update");
    }

    /// `self`'s keys not in `other`, then `other`'s keys not in `self`.
    pub fn symmetric_difference<J>(&self, other: J) -> Self
    where
        J: IntoIterator,
        J::Item: Borrow<K>,
    {
        let other = Self::collect_borrowed(other);
        let mut out = self.select(|key| !other.contains(key));
        for key in other.iter() {
            if !self.contains(key) {
                out.add(key.clone());
            }
        }
        out
    }

    /// Drops keys shared with `other` and adds `other`'s keys that `self`
    /// lacked, in `other`'s order.
    pub fn symmetric_difference_update<J>(&mut self, other: J)
    where
        J: IntoIterator,
        J::Item: Borrow<K>,
    {
        let other = Self::collect_borrowed(other);
        let shared: Vec<K> = self
            .iter()
            .filter(|&key| other.contains(key))
            .cloned()
            .collect();
        for key in other.iter() {
            if !self.contains(key) {
                self.add(key.clone());
            }
        }
        for key in &shared {
            self.discard(key);
        }
        crate::strict_invariants!(&*self, "OrderedSet::symmetric_difference_update");
    }

    /// New set of `self`'s keys accepted by `keep`, in `self`'s order.
    fn select(&self, mut keep: impl FnMut(&K) -> bool) -> Self {
        let mut out = self.empty_like();
        for key in self.iter().filter(|&key| keep(key)) {
            out.append_preserving(key.clone());
        }
        out
    }

    fn collect_borrowed<J>(other: J) -> Self
    where
        J: IntoIterator,
        J::Item: Borrow<K>,
    {
        let mut set = Self::new();
        for key in other {
            let key: &K = key.borrow();
            if !set.contains(key) {
                set.add(key.clone());
            }
        }
        set
    }
}
