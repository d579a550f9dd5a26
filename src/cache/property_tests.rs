//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store against a simple recency-ordered model.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::cache::{CacheStore, EvictionStrategy};

// == Strategies ==
/// Small key space so operations collide often
fn key_strategy() -> impl Strategy<Value = u8> {
    0u8..24
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: u8, value: u32 },
    Get { key: u8 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), any::<u32>()).prop_map(|(key, value)| CacheOp::Put { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

fn unique_keys(keys: Vec<u8>) -> Vec<u8> {
    let mut seen = HashSet::new();
    keys.into_iter().filter(|k| seen.insert(*k)).collect()
}

// == Reference Model ==
/// Vec ordered most-recent first; linear but obviously correct.
struct Model {
    capacity: usize,
    entries: Vec<(u8, u32)>,
}

impl Model {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::new(),
        }
    }

    fn put(&mut self, key: u8, value: u32) {
        if let Some(pos) = self.entries.iter().position(|(k, _)| *k == key) {
            self.entries.remove(pos);
        } else if self.entries.len() >= self.capacity {
            self.entries.pop();
        }
        self.entries.insert(0, (key, value));
    }

    fn get(&mut self, key: u8) -> Option<u32> {
        let pos = self.entries.iter().position(|(k, _)| *k == key)?;
        let entry = self.entries.remove(pos);
        self.entries.insert(0, entry);
        Some(entry.1)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Every get observes the same result as the model, and the resident key
    // set always matches the model's.
    #[test]
    fn prop_matches_reference_model(
        capacity in 1usize..10,
        ops in prop::collection::vec(cache_op_strategy(), 1..200)
    ) {
        let mut store = CacheStore::new(capacity, EvictionStrategy::LeastRecentlyUsed).unwrap();
        let mut model = Model::new(capacity);

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    store.put(key, value);
                    model.put(key, value);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(store.get(&key).copied(), model.get(key));
                }
            }
            prop_assert_eq!(store.len(), model.entries.len());
            for (key, value) in &model.entries {
                prop_assert_eq!(store.peek(key), Some(value));
            }
        }
    }

    // The store never exceeds capacity and never breaks the index/list pairing.
    #[test]
    fn prop_capacity_and_consistency(
        capacity in 1usize..16,
        ops in prop::collection::vec(cache_op_strategy(), 1..300)
    ) {
        let mut store = CacheStore::new(capacity, EvictionStrategy::LeastRecentlyUsed).unwrap();

        for op in ops {
            match op {
                CacheOp::Put { key, value } => store.put(key, value),
                CacheOp::Get { key } => { store.get(&key); }
            }
            prop_assert!(
                store.len() <= capacity,
                "Cache size {} exceeds capacity {}",
                store.len(),
                capacity
            );
            if let Err(msg) = store.check_consistency() {
                prop_assert!(false, "inconsistent store: {}", msg);
            }
        }
    }

    // Inserting N > C distinct keys leaves exactly the last C resident.
    #[test]
    fn prop_keeps_most_recent_distinct_keys(
        keys in prop::collection::vec(key_strategy(), 1..60),
        capacity in 1usize..8
    ) {
        let keys = unique_keys(keys);
        let mut store = CacheStore::new(capacity, EvictionStrategy::LeastRecentlyUsed).unwrap();

        for key in &keys {
            store.put(*key, u32::from(*key));
        }

        let expected: HashSet<u8> = keys.iter().rev().take(capacity).copied().collect();
        prop_assert_eq!(store.len(), expected.len());
        for key in &keys {
            prop_assert_eq!(store.contains(key), expected.contains(key), "key {}", key);
        }
    }

    // Filling to capacity then adding one more key evicts the first key;
    // touching the first key beforehand evicts the second instead.
    #[test]
    fn prop_lru_eviction_order(
        keys in prop::collection::vec(key_strategy(), 3..12),
        touch_first in any::<bool>()
    ) {
        let keys = unique_keys(keys);
        prop_assume!(keys.len() >= 3);

        let (initial, extra) = keys.split_at(keys.len() - 1);
        let capacity = initial.len();
        let mut store = CacheStore::new(capacity, EvictionStrategy::LeastRecentlyUsed).unwrap();

        for key in initial {
            store.put(*key, 0);
        }
        if touch_first {
            prop_assert!(store.get(&initial[0]).is_some());
        }
        store.put(extra[0], 1);

        let evicted = if touch_first { initial[1] } else { initial[0] };
        prop_assert_eq!(store.len(), capacity);
        prop_assert!(!store.contains(&evicted), "key {} should be evicted", evicted);
        for key in initial.iter().filter(|k| **k != evicted) {
            prop_assert!(store.contains(key), "key {} should survive", key);
        }
        prop_assert!(store.contains(&extra[0]));
    }

    // Overwriting a key replaces its value without growing the store.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in any::<u32>(),
        value2 in any::<u32>()
    ) {
        let mut store = CacheStore::new(4, EvictionStrategy::LeastRecentlyUsed).unwrap();

        store.put(key, value1);
        store.put(key, value2);

        prop_assert_eq!(store.get(&key), Some(&value2));
        prop_assert_eq!(store.len(), 1);
    }
}
