//! Cache Metrics
//!
//! Counters describing how a cache has been used, reported through the
//! [`CacheMetrics`] trait as a `BTreeMap<String, f64>`.
//!
//! BTreeMap is used instead of HashMap so that metrics always come out in
//! the same order, which keeps test assertions and printed reports stable.
//!
//! Capacity accounting is count-based: every entry weighs one, so the
//! "size" of the cache is simply its number of entries.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod lru;

pub use lru::LruCacheMetrics;

/// Counters tracked by every cache.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoreCacheMetrics {
    /// Total number of lookups made against the cache
    pub requests: u64,

    /// Number of lookups that found their key
    pub cache_hits: u64,

    /// Number of new entries stored
    pub insertions: u64,

    /// Number of in-place overwrites of an existing key
    pub updates: u64,

    /// Number of entries evicted to stay within capacity
    pub evictions: u64,

    /// Number of entries removed explicitly (`remove`, `pop_lru`)
    pub removals: u64,

    /// Number of inserts dropped because the capacity is zero
    pub rejected: u64,

    /// Number of entries currently stored
    pub entries: u64,

    /// Maximum number of entries the cache can hold
    pub capacity: u64,
}

impl CoreCacheMetrics {
    /// Creates a new CoreCacheMetrics instance for a cache of `capacity`
    /// entries.
    pub fn new(capacity: u64) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }

    /// Records a lookup that found its key.
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a lookup that did not find its key.
    ///
    /// Cache misses are calculated as (requests - cache_hits).
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records a new entry being stored.
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
        self.entries += 1;
    }

    /// Records an existing entry's value being replaced.
    pub fn record_update(&mut self) {
        self.updates += 1;
    }

    /// Records an entry being evicted due to capacity constraints.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
        self.entries = self.entries.saturating_sub(1);
    }

    /// Records an entry being removed on request.
    pub fn record_removal(&mut self) {
        self.removals += 1;
        self.entries = self.entries.saturating_sub(1);
    }

    /// Records an insert that could not be retained.
    pub fn record_rejection(&mut self) {
        self.rejected += 1;
    }

    /// Records the cache being emptied.
    pub fn record_clear(&mut self) {
        self.entries = 0;
    }

    /// Returns the number of lookups that missed.
    pub fn cache_misses(&self) -> u64 {
        self.requests - self.cache_hits
    }

    /// Calculates the cache hit rate
    ///
    /// # Returns
    /// A value between 0.0 and 1.0, or 0.0 if no requests have been made
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Calculates the cache miss rate
    ///
    /// # Returns
    /// A value between 0.0 and 1.0, or 0.0 if no requests have been made
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_misses() as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Calculates how full the cache is relative to its capacity
    ///
    /// # Returns
    /// A value between 0.0 and 1.0, or 0.0 if the capacity is 0
    pub fn cache_utilization(&self) -> f64 {
        if self.capacity > 0 {
            self.entries as f64 / self.capacity as f64
        } else {
            0.0
        }
    }

    /// Convert core metrics to BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        // Counters
        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert("cache_misses".to_string(), self.cache_misses() as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("rejected".to_string(), self.rejected as f64);
        metrics.insert("removals".to_string(), self.removals as f64);
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("updates".to_string(), self.updates as f64);

        // Rates (0.0 to 1.0)
        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        // Occupancy
        metrics.insert("entries".to_string(), self.entries as f64);
        metrics.insert("capacity".to_string(), self.capacity as f64);
        metrics.insert("cache_utilization".to_string(), self.cache_utilization());

        if self.requests > 0 {
            metrics.insert(
                "eviction_rate".to_string(),
                self.evictions as f64 / self.requests as f64,
            );
        }

        metrics
    }
}

/// Uniform interface for retrieving metrics from a cache.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs, sorted by name.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Algorithm name for identification (e.g. "LRU").
    fn algorithm_name(&self) -> &'static str;
}
