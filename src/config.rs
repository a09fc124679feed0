//! Cache configuration.
//!
//! [`LruCacheConfig`] has public fields, following the plain-struct style:
//! create it with every field set and pass it to
//! [`LruCache::init`](crate::LruCache::init).
//!
//! Capacity is an entry count. Zero is allowed and yields a cache that
//! retains nothing. Signed capacities coming from outside the program
//! (command-line flags, config files) can be converted with `TryFrom`,
//! which rejects negative values instead of clamping them.
//!
//! # Examples
//!
//! ```
//! use arena_lru::config::LruCacheConfig;
//! use arena_lru::LruCache;
//!
//! let config = LruCacheConfig { capacity: 1000 };
//! let cache: LruCache<String, i32> = LruCache::init(config, None);
//! assert_eq!(cache.cap(), 1000);
//!
//! let config = LruCacheConfig::try_from(64i64).unwrap();
//! assert_eq!(config.capacity, 64);
//! assert!(LruCacheConfig::try_from(-64i64).is_err());
//! ```

use crate::error::ConfigError;
use core::fmt;

/// Configuration for an LRU (Least Recently Used) cache.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache retains at once.
    pub capacity: usize,
}

impl LruCacheConfig {
    /// Creates a configuration with the given capacity.
    #[inline]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl TryFrom<i64> for LruCacheConfig {
    type Error = ConfigError;

    fn try_from(capacity: i64) -> Result<Self, Self::Error> {
        if capacity < 0 {
            return Err(ConfigError::NegativeCapacity(capacity));
        }
        let capacity =
            usize::try_from(capacity).map_err(|_| ConfigError::CapacityOverflow(capacity))?;
        Ok(Self::new(capacity))
    }
}

impl TryFrom<isize> for LruCacheConfig {
    type Error = ConfigError;

    fn try_from(capacity: isize) -> Result<Self, Self::Error> {
        // isize is at most 64 bits on every supported target
        Self::try_from(capacity as i64)
    }
}
