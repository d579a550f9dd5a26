//! Shared Cache Module
//!
//! Thread-safe handle over [`CacheStore`]. One mutex covers the index and
//! the recency list together, so operations are linearizable.

use std::hash::Hash;

use parking_lot::Mutex;
use tracing::info;

use crate::cache::{CacheStore, EvictionStrategy};
use crate::config::Config;
use crate::error::Result;

// == Cache ==
/// Fixed-capacity LRU cache safe for concurrent use.
///
/// Share it between threads or tasks behind an `Arc`. `get` reorders
/// recency state, so both reads and writes take the lock exclusively.
///
/// # Example
/// ```
/// use lru_cache::{Cache, EvictionStrategy};
///
/// let cache = Cache::new(2, EvictionStrategy::LeastRecentlyUsed).unwrap();
/// cache.put("a", 1);
/// cache.put("b", 2);
/// cache.get(&"a");
/// cache.put("c", 3);
///
/// assert_eq!(cache.get(&"a"), Some(1));
/// assert_eq!(cache.get(&"b"), None);
/// ```
#[derive(Debug)]
pub struct Cache<K, V> {
    inner: Mutex<CacheStore<K, V>>,
}

impl<K, V> Cache<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`crate::CacheError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize, strategy: EvictionStrategy) -> Result<Self> {
        let store = CacheStore::new(capacity, strategy)?;
        info!(capacity, %strategy, "cache created");
        Ok(Self {
            inner: Mutex::new(store),
        })
    }

    /// Creates a cache from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.capacity, config.strategy)
    }

    // == Put ==
    /// Inserts or updates `key`, making it the most recently used entry.
    pub fn put(&self, key: K, value: V) {
        self.inner.lock().put(key, value);
    }

    // == Get ==
    /// Returns a copy of the value for `key` and marks it most recently
    /// used. `None` means the key is not resident.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    // == Contains ==
    /// Checks residency without changing recency order.
    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Eviction policy fixed at construction.
    pub fn strategy(&self) -> EvictionStrategy {
        self.inner.lock().strategy()
    }

    /// Runs the store's index/list consistency check under the lock.
    #[doc(hidden)]
    pub fn check_consistency(&self) -> std::result::Result<(), String> {
        self.inner.lock().check_consistency()
    }
}
