//! Error types.
//!
//! Lookups never fail: a miss is reported as `None`. The only errors are
//! produced when building a configuration from a signed capacity and when
//! an internal consistency check finds a broken invariant.
//!
//! - [`ConfigError`]: an invalid configuration value, rejected at
//!   construction instead of being clamped.
//! - [`InvariantError`]: returned by
//!   [`LruCache::check_invariants`](crate::LruCache::check_invariants).
//!
//! # Examples
//!
//! ```
//! use arena_lru::config::LruCacheConfig;
//! use arena_lru::error::ConfigError;
//!
//! let err = LruCacheConfig::try_from(-1i64).unwrap_err();
//! assert_eq!(err, ConfigError::NegativeCapacity(-1));
//! ```

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// Error returned when cache configuration parameters are invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The requested capacity was negative.
    NegativeCapacity(i64),
    /// The requested capacity does not fit in `usize` on this target.
    CapacityOverflow(i64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NegativeCapacity(c) => {
                write!(f, "capacity must be non-negative, got {}", c)
            }
            ConfigError::CapacityOverflow(c) => {
                write!(f, "capacity {} does not fit in usize", c)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Error returned when the cache's internal invariants are violated.
///
/// Carries a description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvariantError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::NegativeCapacity(-3).to_string(),
            "capacity must be non-negative, got -3"
        );
        assert!(ConfigError::CapacityOverflow(i64::MAX)
            .to_string()
            .contains("usize"));
    }

    #[test]
    fn test_invariant_error_message() {
        let err = InvariantError::new("index and list disagree");
        assert_eq!(err.message(), "index and list disagree");
        assert_eq!(err.to_string(), "index and list disagree");
    }
}
