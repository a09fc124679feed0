//! Cache entry type.
//!
//! A [`CacheEntry`] is the key/value pair stored in the recency list. It is
//! created when a key is first inserted, its value is replaced in place on
//! overwrite, and it is dropped on eviction, removal or cache teardown.
//!
//! The key is stored alongside the value so that evicting the least
//! recently used node also yields the key needed to unbind it from the
//! key index.

use core::fmt;

/// Key/value pair held by the cache.
///
/// # Examples
///
/// ```
/// use arena_lru::entry::CacheEntry;
///
/// let mut entry = CacheEntry::new("key", 42);
/// assert_eq!(entry.key, "key");
/// assert_eq!(entry.replace_value(43), 42);
/// assert_eq!(entry.into_pair(), ("key", 43));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct CacheEntry<K, V> {
    /// The cached key.
    pub key: K,

    /// The cached value.
    pub value: V,
}

impl<K, V> CacheEntry<K, V> {
    /// Creates a new entry.
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Replaces the value in place and returns the previous one.
    #[inline]
    pub fn replace_value(&mut self, value: V) -> V {
        core::mem::replace(&mut self.value, value)
    }

    /// Consumes the entry, returning `(key, value)`.
    #[inline]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }

    /// Returns references to the key and value.
    #[inline]
    pub fn as_pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for CacheEntry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}
