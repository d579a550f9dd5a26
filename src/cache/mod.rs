//! Cache Module
//!
//! Provides the fixed-capacity in-memory cache with LRU eviction.

mod entry;
mod evictor;
mod lru;
mod shared;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use evictor::{EvictionStrategy, Evictor, LruEvictor};
pub use lru::{Handle, RecencyList};
pub use shared::Cache;
pub use store::CacheStore;
