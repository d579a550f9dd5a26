//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;

use tracing::warn;

use crate::cache::EvictionStrategy;

/// Default number of entries when `CACHE_CAPACITY` is unset or invalid.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// Eviction policy
    pub strategy: EvictionStrategy,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `CACHE_EVICTION_STRATEGY` - Eviction policy name (default: `lru`)
    ///
    /// Values that fail to parse are logged at `warn` and fall back to their
    /// defaults. A capacity of
    /// zero is passed through and rejected when the cache is built.
    pub fn from_env() -> Self {
        Self {
            capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| {
                    v.trim()
                        .parse::<usize>()
                        .map_err(|err| {
                            warn!(
                                "Invalid CACHE_CAPACITY {:?} ({}), falling back to {}",
                                v, err, DEFAULT_CAPACITY
                            )
                        })
                        .ok()
                })
                .unwrap_or(DEFAULT_CAPACITY),
            strategy: env::var("CACHE_EVICTION_STRATEGY")
                .ok()
                .and_then(|v| {
                    v.parse::<EvictionStrategy>()
                        .map_err(|err| warn!("{}, falling back to lru", err))
                        .ok()
                })
                .unwrap_or_default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            strategy: EvictionStrategy::LeastRecentlyUsed,
        }
    }
}
