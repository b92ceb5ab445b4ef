//! Operator forms of the set algebra on references.

use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign,
};

use super::ordered::OrderedSet;
use crate::bounds::KeyLike;

impl<K: KeyLike> BitOr<&OrderedSet<K>> for &OrderedSet<K> {
    type Output = OrderedSet<K>;

    fn bitor(self, rhs: &OrderedSet<K>) -> OrderedSet<K> {
        self.union([rhs])
    }
}

impl<K: KeyLike> BitAnd<&OrderedSet<K>> for &OrderedSet<K> {
    type Output = OrderedSet<K>;

    fn bitand(self, rhs: &OrderedSet<K>) -> OrderedSet<K> {
        self.intersection([rhs])
    }
}

impl<K: KeyLike> Sub<&OrderedSet<K>> for &OrderedSet<K> {
    type Output = OrderedSet<K>;

    fn sub(self, rhs: &OrderedSet<K>) -> OrderedSet<K> {
        self.difference([rhs])
    }
}

impl<K: KeyLike> BitXor<&OrderedSet<K>> for &OrderedSet<K> {
    type Output = OrderedSet<K>;

    fn bitxor(self, rhs: &OrderedSet<K>) -> OrderedSet<K> {
        self.symmetric_difference(rhs)
    }
}

impl<K: KeyLike> BitOrAssign<&OrderedSet<K>> for OrderedSet<K> {
    fn bitor_assign(&mut self, rhs: &OrderedSet<K>) {
        self.update([rhs]);
    }
}

impl<K: KeyLike> BitAndAssign<&OrderedSet<K>> for OrderedSet<K> {
    fn bitand_assign(&mut self, rhs: &OrderedSet<K>) {
        self.intersection_update([rhs]);
    }
}

impl<K: KeyLike> SubAssign<&OrderedSet<K>> for OrderedSet<K> {
    fn sub_assign(&mut self, rhs: &OrderedSet<K>) {
        self.difference_update(rhs);
    }
}

impl<K: KeyLike> BitXorAssign<&OrderedSet<K>> for OrderedSet<K> {
    fn bitxor_assign(&mut self, rhs: &OrderedSet<K>) {
        self.symmetric_difference_update(rhs);
    }
}
