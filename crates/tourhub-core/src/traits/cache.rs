//! Cache provider abstraction.

use std::time::Duration;

use async_trait::async_trait;

use crate::result::AppResult;

/// String-keyed cache with TTL semantics.
///
/// Values are stored as strings; callers serialize structured data
/// (typically JSON) before insertion.
#[async_trait]
pub trait CacheProvider: Send + Sync + 'static {
    /// Fetch a value, or `None` on miss/expiry.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store a value with an explicit TTL.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()>;

    /// Remove a single key.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Remove every key matching a `prefix*` pattern. Returns the number
    /// of keys removed.
    async fn delete_pattern(&self, pattern: &str) -> AppResult<u64>;
}
