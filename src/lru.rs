//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides a fixed-capacity LRU cache with O(1) average-case
//! `get` and `put`.
//!
//! # Algorithm
//!
//! The cache keeps its entries in a recency list whose head is the least
//! recently used entry and whose tail is the most recently used one. A hash
//! index maps every key to the handle of its list node, so a lookup can jump
//! straight to the node and relocate it to the tail. When a new key arrives
//! and the cache is full, the head is evicted.
//!
//! ```text
//!   index: HashMap<K, Handle>
//!     "b" ──────────────┐   "a" ───────────┐   "c" ──────────────┐
//!                       ▼                  ▼                     ▼
//!   list:   head ─► [ b: 2 ] ◄──► [ a: 1 ] ◄──► [ c: 3 ] ◄── tail
//!                    (evicted next)              (most recent)
//! ```
//!
//! Handles are arena indices, not pointers, so they stay valid while other
//! entries are inserted, evicted or moved, and the whole structure is
//! written in safe Rust.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(1) average
//!   - Put: O(1) average
//!   - Remove: O(1) average
//!
//! - **Space Complexity**:
//!   - O(n) where n is the capacity of the cache. Each entry stores its key
//!     twice (index and list), its value, and two link indices.
//!
//! # Capacity Zero
//!
//! A cache built with capacity 0 retains nothing. `put` on such a cache
//! drops the value and evicts nothing, and every `get` misses.
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. Every lookup changes recency
//! order and therefore needs `&mut self`. To share a cache between threads,
//! wrap the whole cache in a `Mutex`.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::entry::CacheEntry;
use crate::error::InvariantError;
use crate::index::KeyIndex;
use crate::list::{self, Handle, List};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};

#[cfg(feature = "hashbrown")]
pub use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
pub use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// An implementation of a Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) operations for
/// inserting, retrieving, and updating entries. When the cache reaches
/// capacity, the least recently used entry is evicted to make room for a
/// new key.
///
/// # Examples
///
/// ```
/// use arena_lru::LruCache;
///
/// let mut cache = LruCache::new(2);
///
/// // Add items to the cache
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Accessing items updates their recency
/// assert_eq!(cache.get(&"apple"), Some(&1));
///
/// // Adding beyond capacity evicts the least recently used item
/// assert_eq!(cache.put("cherry", 3), Some(("banana", 2)));
/// assert_eq!(cache.get(&"banana"), None);
/// assert_eq!(cache.get(&"apple"), Some(&1));
/// assert_eq!(cache.get(&"cherry"), Some(&3));
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    config: LruCacheConfig,
    list: List<CacheEntry<K, V>>,
    index: KeyIndex<K, S>,
    metrics: LruCacheMetrics,
}

impl<K: Hash + Eq, V> LruCache<K, V> {
    /// Creates a new LRU cache holding at most `cap` entries.
    ///
    /// A capacity of 0 is allowed and produces a cache that retains nothing.
    pub fn new(cap: usize) -> LruCache<K, V, DefaultHashBuilder> {
        LruCache::with_hasher(cap, DefaultHashBuilder::default())
    }

    /// Creates a new LRU cache from a configuration.
    ///
    /// `hasher` defaults to [`DefaultHashBuilder`] when `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_lru::config::LruCacheConfig;
    /// use arena_lru::LruCache;
    ///
    /// let config = LruCacheConfig { capacity: 100 };
    /// let mut cache = LruCache::init(config, None);
    /// cache.put(1u32, "one");
    /// assert_eq!(cache.cap(), 100);
    /// ```
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        LruCache::with_config_and_hasher(config, hasher.unwrap_or_default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a new LRU cache with the specified capacity and hash builder.
    pub fn with_hasher(cap: usize, hash_builder: S) -> Self {
        Self::with_config_and_hasher(LruCacheConfig::new(cap), hash_builder)
    }

    /// Creates a new LRU cache from a configuration and hash builder.
    pub fn with_config_and_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        LruCache {
            config,
            list: List::with_capacity(config.capacity),
            index: KeyIndex::with_capacity_and_hasher(config.capacity, hash_builder),
            metrics: LruCacheMetrics::new(config.capacity as u64),
        }
    }

    /// Returns the maximum number of entries the cache retains.
    #[inline]
    pub fn cap(&self) -> usize {
        self.config.capacity
    }

    /// Returns the number of entries currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the cache's metrics.
    #[inline]
    pub fn metrics(&self) -> &LruCacheMetrics {
        &self.metrics
    }

    /// Looks up `key`, marking it most recently used on a hit.
    ///
    /// Returns `None` on a miss; a miss never changes the cache.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.index.lookup(key) {
            Some(handle) => {
                self.touch(handle);
                self.list.get(handle).map(|entry| &entry.value)
            }
            None => {
                self.metrics.core.record_miss();
                None
            }
        }
    }

    /// Looks up `key` for modification, marking it most recently used on a
    /// hit.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.index.lookup(key) {
            Some(handle) => {
                self.touch(handle);
                self.list.get_mut(handle).map(|entry| &mut entry.value)
            }
            None => {
                self.metrics.core.record_miss();
                None
            }
        }
    }

    /// Returns the value for `key` without changing its recency or the
    /// metrics.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = self.index.lookup(key)?;
        self.list.get(handle).map(|entry| &entry.value)
    }

    /// Returns true if `key` is cached. Does not change its recency.
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index.contains(key)
    }

    /// Returns the least recently used entry, the next eviction candidate,
    /// without changing its recency.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let handle = self.list.front()?;
        self.list.get(handle).map(CacheEntry::as_pair)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let (key, value) = self.unlink_front()?;
        self.metrics.core.record_removal();
        Some((key, value))
    }

    /// Removes `key` from the cache, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = self.index.remove(key)?;
        let entry = self.list.remove(handle)?;
        self.metrics.core.record_removal();
        Some(entry.value)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.index.clear();
        self.list.clear();
        self.metrics.core.record_clear();
    }

    /// Returns an iterator over the entries from least to most recently
    /// used. Iterating does not change recency.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// Verifies the structural invariants tying the index to the list.
    ///
    /// Checks that the index and the list hold the same number of entries,
    /// that the count is within capacity, that every indexed handle
    /// addresses a live entry carrying the same key, and that the list links
    /// reach exactly that many entries.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but list holds {} entries",
                self.index.len(),
                self.list.len()
            )));
        }
        if self.list.len() > self.cap() {
            return Err(InvariantError::new(format!(
                "{} entries exceed capacity {}",
                self.list.len(),
                self.cap()
            )));
        }
        for (key, handle) in self.index.iter() {
            match self.list.get(handle) {
                Some(entry) if entry.key == *key => {}
                Some(_) => {
                    return Err(InvariantError::new(format!(
                        "{:?} addresses an entry with a different key",
                        handle
                    )))
                }
                None => {
                    return Err(InvariantError::new(format!(
                        "{:?} addresses a vacant slot",
                        handle
                    )))
                }
            }
        }
        let linked = self.list.iter().count();
        if linked != self.list.len() {
            return Err(InvariantError::new(format!(
                "list links reach {} of {} entries",
                linked,
                self.list.len()
            )));
        }
        Ok(())
    }

    /// Marks the entry at `handle` most recently used and records the hit.
    fn touch(&mut self, handle: Handle) {
        self.metrics.core.record_hit();
        if self.list.back() == Some(handle) {
            self.metrics.record_mru_hit();
        } else {
            self.list.move_to_back(handle);
        }
    }

    /// Detaches the least recently used entry from both the list and the
    /// index.
    fn unlink_front(&mut self) -> Option<(K, V)> {
        let entry = self.list.pop_front()?;
        self.index.remove(&entry.key);
        Some(entry.into_pair())
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Inserts or overwrites `key`, making it the most recently used entry.
    ///
    /// - If `key` is already cached, its value is replaced in place. The
    ///   number of entries does not change and nothing is evicted.
    /// - If `key` is new and the cache is full, the least recently used
    ///   entry is evicted first and returned.
    /// - If the capacity is 0, the value is dropped and nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_lru::LruCache;
    ///
    /// let mut cache = LruCache::new(2);
    /// cache.put("a", 1);
    /// cache.put("b", 2);
    /// assert_eq!(cache.put("a", 99), None);
    /// assert_eq!(cache.len(), 2);
    ///
    /// // "b" is now the oldest entry
    /// assert_eq!(cache.put("c", 3), Some(("b", 2)));
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(handle) = self.index.lookup(&key) {
            if let Some(entry) = self.list.get_mut(handle) {
                entry.replace_value(value);
            }
            self.list.move_to_back(handle);
            self.metrics.core.record_update();
            return None;
        }

        if self.cap() == 0 {
            self.metrics.core.record_rejection();
            return None;
        }

        let evicted = if self.len() >= self.cap() {
            let evicted = self.unlink_front();
            if evicted.is_some() {
                self.metrics.core.record_eviction();
            }
            evicted
        } else {
            None
        };

        let handle = self.list.push_back(CacheEntry::new(key.clone(), value));
        self.index.insert(key, handle);
        self.metrics.core.record_insertion();

        evicted
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.config.capacity)
            .field("len", &self.list.len())
            .finish()
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> IntoIterator for &'a LruCache<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a cache's entries from least to most recently used.
pub struct Iter<'a, K, V> {
    inner: list::Iter<'a, CacheEntry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, entry)| entry.as_pair())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}
