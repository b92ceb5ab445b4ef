/// One slot in a [`LinkArena`](super::LinkArena).
///
/// `prev`/`next` are slot indices. The sentinel and vacated slots carry
/// `key: None`.
#[derive(Clone, Debug)]
pub struct Node<K> {
    pub(crate) key: Option<K>,
    pub(crate) prev: usize,
    pub(crate) next: usize,
}

impl<K> Node<K> {
    pub(crate) fn sentinel(slot: usize) -> Self {
        Node {
            key: None,
            prev: slot,
            next: slot,
        }
    }

    /// Is this node live (not the sentinel, not vacated)?
    #[inline]
    pub fn is_live(&self) -> bool {
        self.key.is_some()
    }

    #[inline]
    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    #[inline]
    pub fn prev(&self) -> usize {
        self.prev
    }

    #[inline]
    pub fn next(&self) -> usize {
        self.next
    }
}
