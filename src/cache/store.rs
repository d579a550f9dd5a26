//! Cache Store Module
//!
//! Eviction engine combining a hash index with the recency list. Not
//! synchronised; [`crate::cache::Cache`] wraps it in a lock.

use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;
use tracing::{debug, trace};

use crate::cache::{CacheEntry, EvictionStrategy, Handle, RecencyList};
use crate::error::{CacheError, Result};

/// Upper bound on slots reserved at construction; larger caches grow on demand.
const PREALLOC_LIMIT: usize = 1024;

// == Cache Store ==
/// Fixed-capacity key/value storage with policy-driven eviction.
///
/// Invariants: every key in `index` maps to the one list node holding that
/// key, every list node is indexed, and `len() <= capacity`.
#[derive(Debug)]
pub struct CacheStore<K, V> {
    /// Key to list-node lookup
    index: HashMap<K, Handle, RandomState>,
    /// Access order of resident entries
    order: RecencyList<K, V>,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Policy used to choose eviction victims
    strategy: EvictionStrategy,
}

impl<K, V> CacheStore<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates a new CacheStore with the given capacity and eviction policy.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize, strategy: EvictionStrategy) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }

        let reserve = capacity.min(PREALLOC_LIMIT);
        Ok(Self {
            index: HashMap::with_capacity_and_hasher(reserve, RandomState::new()),
            order: RecencyList::with_capacity(reserve),
            capacity,
            strategy,
        })
    }

    // == Put ==
    /// Stores a key-value pair.
    ///
    /// An existing key has its value replaced in place and becomes most
    /// recently used. A new key arriving at capacity first evicts exactly
    /// one entry chosen by the strategy.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(&handle) = self.index.get(&key) {
            if let Some(entry) = self.order.get_mut(handle) {
                entry.value = value;
            }
            self.order.move_to_front(handle);
            return;
        }

        if self.index.len() >= self.capacity {
            self.evict();
        }

        let handle = self.order.push_front(CacheEntry::new(key.clone(), value));
        self.index.insert(key, handle);
    }

    // == Get ==
    /// Retrieves a value by key, marking it most recently used.
    ///
    /// A miss leaves the store untouched.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let Some(&handle) = self.index.get(key) else {
            trace!("cache miss");
            return None;
        };

        trace!("cache hit");
        self.order.move_to_front(handle);
        self.order.get(handle).map(|entry| &entry.value)
    }

    // == Peek ==
    /// Retrieves a value without changing recency order.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.index
            .get(key)
            .and_then(|&handle| self.order.get(handle))
            .map(|entry| &entry.value)
    }

    // == Contains ==
    /// Checks if a key is resident, without changing recency order.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Eviction policy fixed at construction.
    pub fn strategy(&self) -> EvictionStrategy {
        self.strategy
    }

    // == Evict ==
    /// Removes one victim from both the list and the index.
    ///
    /// No-op on an empty store.
    fn evict(&mut self) {
        let Some(victim) = self.strategy.select_victim(&self.order) else {
            return;
        };

        if let Some(entry) = self.order.remove(victim) {
            self.index.remove(&entry.key);
            debug!(
                strategy = %self.strategy,
                age_ms = entry.age_ms(),
                "evicted cache entry"
            );
        }
    }

    // == Consistency Check ==
    /// Verifies that the index and the recency list describe the same set
    /// of entries. Intended for tests.
    #[doc(hidden)]
    pub fn check_consistency(&self) -> std::result::Result<(), String> {
        if self.index.len() != self.order.len() {
            return Err(format!(
                "index has {} keys but list has {} nodes",
                self.index.len(),
                self.order.len()
            ));
        }
        if self.index.len() > self.capacity {
            return Err(format!(
                "{} entries exceed capacity {}",
                self.index.len(),
                self.capacity
            ));
        }

        let mut walked = 0;
        let mut cursor = self.order.front();
        while let Some(handle) = cursor {
            let entry = self
                .order
                .get(handle)
                .ok_or_else(|| format!("list links to vacant slot {:?}", handle))?;
            match self.index.get(&entry.key) {
                Some(&indexed) if indexed == handle => {}
                Some(&indexed) => {
                    return Err(format!(
                        "index points at {:?}, list node is {:?}",
                        indexed, handle
                    ))
                }
                None => return Err(format!("list node {:?} is not indexed", handle)),
            }
            walked += 1;
            if walked > self.order.len() {
                return Err("recency list contains a cycle".to_string());
            }
            cursor = self.order.next(handle);
        }

        if walked != self.order.len() {
            return Err(format!(
                "walked {} nodes but list reports {}",
                walked,
                self.order.len()
            ));
        }
        Ok(())
    }
}
