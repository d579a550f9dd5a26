//! LRU Cache - A fixed-capacity in-memory key/value cache
//!
//! Provides O(1) get/put with least-recently-used eviction, safe for
//! concurrent access from many threads or tasks.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{Cache, EvictionStrategy};
pub use config::Config;
pub use error::{CacheError, Result};
