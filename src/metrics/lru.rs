//! LRU Cache Metrics
//!
//! Metrics specific to the LRU (Least Recently Used) cache algorithm.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// LRU-specific metrics (extends CoreCacheMetrics)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LruCacheMetrics {
    /// Core metrics common to all caches
    pub core: CoreCacheMetrics,

    /// Number of hits that found the key already at the most recently used
    /// position, so no relocation was needed
    pub mru_hits: u64,
}

impl LruCacheMetrics {
    /// Creates a new LruCacheMetrics instance for a cache of `capacity`
    /// entries.
    pub fn new(capacity: u64) -> Self {
        Self {
            core: CoreCacheMetrics::new(capacity),
            mru_hits: 0,
        }
    }

    /// Records a hit on the entry that was already most recently used.
    pub fn record_mru_hit(&mut self) {
        self.mru_hits += 1;
    }

    /// Converts LRU metrics to a BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert("mru_hits".to_string(), self.mru_hits as f64);
        metrics
    }
}

impl CacheMetrics for LruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}
