#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Quick Reference
//!
//! | Operation | Method | Recency | Cost |
//! |-----------|--------|---------|------|
//! | Set       | [`LruCache::put`] | refreshes key | O(1) avg |
//! | Get       | [`LruCache::get`], [`LruCache::get_mut`] | refreshes on hit | O(1) avg |
//! | Peek      | [`LruCache::peek`], [`LruCache::contains`], [`LruCache::peek_lru`] | unchanged | O(1) avg |
//! | Remove    | [`LruCache::remove`], [`LruCache::pop_lru`], [`LruCache::clear`] | n/a | O(1) avg |
//! | Iterate   | [`LruCache::iter`] | unchanged | O(n) |
//!
//! ## Structure
//!
//! ```text
//! ┌──────────────────────────── LruCache<K, V, S> ─────────────────────────────┐
//! │                                                                            │
//! │   KeyIndex: HashMap<K, Handle>         List<CacheEntry<K, V>>              │
//! │   ┌─────────┬────────┐                ┌──────────────────────────────┐    │
//! │   │ "a"     │ #0     │──────────────▶ │ #0 { a, 1 }  prev: -, next #2│ LRU│
//! │   │ "b"     │ #2     │──────────────▶ │ #2 { b, 2 }  prev #0, next #1│    │
//! │   │ "c"     │ #1     │──────────────▶ │ #1 { c, 3 }  prev #2, next - │ MRU│
//! │   └─────────┴────────┘                └──────────────────────────────┘    │
//! │                                                                            │
//! └────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The list owns every entry; the index holds only handles (arena slot
//! numbers). The two are updated together inside each method, so callers
//! never observe one without the other.
//!
//! ## Example
//!
//! ```rust
//! use arena_lru::LruCache;
//! use arena_lru::config::LruCacheConfig;
//!
//! let config = LruCacheConfig { capacity: 2 };
//! let mut cache = LruCache::init(config, None);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");      // "a" becomes most recently used
//! cache.put("c", 3);    // "b" evicted (least recently used)
//! assert!(cache.get(&"b").is_none());
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: the cache itself
//! - [`entry`]: the key/value pair stored per entry
//! - [`config`]: configuration structure
//! - [`error`]: configuration and invariant errors
//! - [`metrics`]: counters for hits, misses, evictions and occupancy

#![no_std]

#[cfg(any(feature = "std", not(feature = "hashbrown")))]
extern crate std;

/// Key/value entry type stored by the cache.
pub mod entry;

/// Arena-backed doubly linked list ordering entries by recency.
///
/// **Note**: This module is internal infrastructure. Use [`LruCache`]
/// instead.
pub(crate) mod list;

/// Hash index from key to list handle.
pub(crate) mod index;

/// Cache configuration structure.
pub mod config;

/// Error types for configuration and invariant checking.
pub mod error;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used item
/// when the capacity is reached.
pub mod lru;

/// Cache metrics system.
///
/// Counters for hits, misses, insertions, updates and evictions, reported
/// through a common trait.
pub mod metrics;

pub use config::LruCacheConfig;
pub use entry::CacheEntry;
pub use error::{ConfigError, InvariantError};
pub use lru::{DefaultHashBuilder, LruCache};
pub use metrics::{CacheMetrics, LruCacheMetrics};
