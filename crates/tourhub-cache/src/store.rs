//! In-memory cache implementation using the moka crate.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use tracing::debug;

use tourhub_core::config::cache::CacheConfig;
use tourhub_core::result::AppResult;
use tourhub_core::traits::cache::CacheProvider;

/// A cached value together with its requested lifetime.
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    ttl: Duration,
}

/// Per-entry expiry policy: each entry lives for the TTL its writer asked
/// for, bounded by the cache-wide `time_to_live_seconds`.
struct EntryExpiry;

impl Expiry<String, Entry> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// In-memory cache provider using moka.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    /// The underlying moka cache.
    cache: Cache<String, Entry>,
    /// Cache-wide upper bound on entry lifetime.
    max_ttl: Duration,
}

impl MemoryCache {
    /// Create a new in-memory cache from configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .expire_after(EntryExpiry)
            .build();

        Self {
            cache,
            max_ttl: Duration::from_secs(config.time_to_live_seconds),
        }
    }
}

#[async_trait]
impl CacheProvider for MemoryCache {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.cache.get(key).await.map(|entry| entry.value))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        let entry = Entry {
            value: value.to_string(),
            ttl: ttl.min(self.max_ttl),
        };
        self.cache.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.cache.invalidate(key).await;
        Ok(())
    }

    async fn delete_pattern(&self, pattern: &str) -> AppResult<u64> {
        // Moka has no pattern scan; the glob is treated as a prefix and
        // matching keys are collected before removal.
        let prefix = pattern.trim_end_matches('*');
        self.cache.run_pending_tasks().await;
        let keys_to_remove: Vec<String> = self
            .cache
            .iter()
            .filter(|entry| entry.0.starts_with(prefix))
            .map(|entry| entry.0.to_string())
            .collect();

        let mut count = 0u64;
        for key in keys_to_remove {
            self.cache.invalidate(&key).await;
            count += 1;
        }

        debug!(pattern, count, "Deleted keys matching pattern");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_cache() -> MemoryCache {
        MemoryCache::new(&CacheConfig::default())
    }

    #[tokio::test]
    async fn test_set_get_delete() {
        let cache = test_cache();
        cache.set("k", "v", Duration::from_secs(60)).await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), Some("v".to_string()));
        cache.delete("k").await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_pattern_removes_prefix_matches() {
        let cache = test_cache();
        cache
            .set("tourhub:events:public:a", "1", Duration::from_secs(60))
            .await
            .unwrap();
        cache
            .set("tourhub:events:public:b", "2", Duration::from_secs(60))
            .await
            .unwrap();
        cache
            .set("tourhub:venues:public:a", "3", Duration::from_secs(60))
            .await
            .unwrap();

        let removed = cache.delete_pattern("tourhub:events:*").await.unwrap();
        assert_eq!(removed, 2);
        assert!(cache.get("tourhub:events:public:a").await.unwrap().is_none());
        assert!(cache.get("tourhub:venues:public:a").await.unwrap().is_some());
    }
}
