//! Eviction Policy Module
//!
//! Chooses which resident entry to drop when a new key arrives at capacity.

use std::fmt;
use std::str::FromStr;

use crate::cache::{Handle, RecencyList};
use crate::error::CacheError;

// == Evictor ==
/// Picks the victim node for a single eviction.
///
/// Implementations only read the recency list; removing the victim from
/// both the list and the index is left to the store.
///
/// `select_victim` is generic over the entry types, so the trait is not
/// object safe: policies are chosen through [`EvictionStrategy`], which
/// dispatches to a concrete evictor with a `match`, not through `dyn Evictor`.
pub trait Evictor {
    /// Returns the node to evict, or `None` when nothing can be evicted.
    fn select_victim<K, V>(&self, order: &RecencyList<K, V>) -> Option<Handle>;
}

// == LRU Evictor ==
/// Evicts the least recently used entry (the back of the list).
#[derive(Debug, Clone, Copy, Default)]
pub struct LruEvictor;

impl Evictor for LruEvictor {
    fn select_victim<K, V>(&self, order: &RecencyList<K, V>) -> Option<Handle> {
        order.back()
    }
}

// == Eviction Strategy ==
/// Eviction policy selected when the cache is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum EvictionStrategy {
    /// Evict the entry whose last get/put happened longest ago
    #[default]
    LeastRecentlyUsed,
}

impl EvictionStrategy {
    /// Dispatches victim selection to this strategy's evictor.
    pub fn select_victim<K, V>(&self, order: &RecencyList<K, V>) -> Option<Handle> {
        match self {
            EvictionStrategy::LeastRecentlyUsed => LruEvictor.select_victim(order),
        }
    }

    /// Canonical short name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            EvictionStrategy::LeastRecentlyUsed => "lru",
        }
    }
}

impl fmt::Display for EvictionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvictionStrategy {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lru" | "least-recently-used" | "least_recently_used" => {
                Ok(EvictionStrategy::LeastRecentlyUsed)
            }
            _ => Err(CacheError::UnknownStrategy(s.to_string())),
        }
    }
}
