//! LRU Cache demo
//!
//! Builds a cache from the environment, stores one pair and reads it back.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lru_cache::{Cache, Config};

fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lru_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: capacity={}, strategy={}",
        config.capacity, config.strategy
    );

    let cache = Cache::from_config(&config)?;
    cache.put("key1".to_string(), "value1".to_string());

    match cache.get(&"key1".to_string()) {
        Some(value) => println!("Value for key1: {}", value),
        None => println!("Key1 not found in cache"),
    }

    Ok(())
}
