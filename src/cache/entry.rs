//! Cache Entry Module
//!
//! Defines the record held by each node of the recency list.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single resident item: the key, its value and when it was first inserted.
#[derive(Debug, Clone)]
pub struct CacheEntry<K, V> {
    /// The key, kept alongside the value so eviction can clean the index
    pub key: K,
    /// The stored value
    pub value: V,
    /// Creation timestamp (Unix milliseconds). Not read by eviction.
    pub created_at: u64,
}

impl<K, V> CacheEntry<K, V> {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            created_at: current_timestamp_ms(),
        }
    }

    // == Age ==
    /// Milliseconds elapsed since the entry was created.
    pub fn age_ms(&self) -> u64 {
        current_timestamp_ms().saturating_sub(self.created_at)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// A clock set before the epoch yields 0.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
