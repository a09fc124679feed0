//! Key index: maps each cached key to the [`Handle`] of its list node.
//!
//! The index holds handles only. Entry storage belongs to the recency
//! list, so every insert or remove here is paired by the cache with the
//! matching list operation before control returns to the caller.

use crate::list::Handle;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};

#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Hash map from key to list handle.
pub(crate) struct KeyIndex<K, S> {
    map: HashMap<K, Handle, S>,
}

impl<K: Hash + Eq, S: BuildHasher> KeyIndex<K, S> {
    /// Creates an index sized for `capacity` keys.
    pub(crate) fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        KeyIndex {
            map: HashMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the handle bound to `key`, or `None` on a miss.
    #[inline]
    pub(crate) fn lookup<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get(key).copied()
    }

    #[inline]
    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Binds a key that is not yet present.
    pub(crate) fn insert(&mut self, key: K, handle: Handle) {
        let previous = self.map.insert(key, handle);
        debug_assert!(previous.is_none(), "key was already indexed");
    }

    /// Unbinds `key`, returning the handle it held.
    #[inline]
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.remove(key)
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }

    /// Iterates over all bindings in arbitrary order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&K, Handle)> + '_ {
        self.map.iter().map(|(k, h)| (k, *h))
    }
}

impl<K, S> fmt::Debug for KeyIndex<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyIndex")
            .field("len", &self.map.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::List;

    #[cfg(feature = "hashbrown")]
    use hashbrown::DefaultHashBuilder;
    #[cfg(not(feature = "hashbrown"))]
    use std::collections::hash_map::RandomState as DefaultHashBuilder;

    fn index() -> KeyIndex<&'static str, DefaultHashBuilder> {
        KeyIndex::with_capacity_and_hasher(4, DefaultHashBuilder::default())
    }

    #[test]
    fn test_index_insert_lookup_remove() {
        let mut list = List::default();
        let mut idx = index();
        let a = list.push_back("a");
        let b = list.push_back("b");

        idx.insert("a", a);
        idx.insert("b", b);
        assert_eq!(idx.len(), 2);
        assert_eq!(idx.lookup("a"), Some(a));
        assert_eq!(idx.lookup("b"), Some(b));
        assert_eq!(idx.lookup("c"), None);
        assert!(idx.contains("a"));

        assert_eq!(idx.remove("a"), Some(a));
        assert_eq!(idx.lookup("a"), None);
        assert_eq!(idx.remove("a"), None);
        assert_eq!(idx.len(), 1);
    }

    #[test]
    fn test_index_handles_survive_list_edits() {
        let mut list = List::default();
        let mut idx = index();
        for key in ["a", "b", "c"] {
            let h = list.push_back(key);
            idx.insert(key, h);
        }

        let b = idx.lookup("b").unwrap();
        list.move_to_back(b);
        let a = idx.remove("a").unwrap();
        list.remove(a);

        for (key, handle) in idx.iter() {
            assert_eq!(list.get(handle), Some(key));
        }
    }

    #[test]
    fn test_index_clear() {
        let mut list = List::default();
        let mut idx = index();
        idx.insert("x", list.push_back("x"));
        idx.clear();
        assert!(idx.is_empty());
    }
}
