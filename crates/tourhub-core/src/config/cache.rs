//! Cache configuration.

use serde::{Deserialize, Serialize};

/// In-memory cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached entries.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
    /// Upper bound on entry lifetime in seconds.
    #[serde(default = "default_time_to_live")]
    pub time_to_live_seconds: u64,
    /// Default TTL applied when a caller does not specify one.
    #[serde(default = "default_ttl")]
    pub default_ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
            time_to_live_seconds: default_time_to_live(),
            default_ttl_seconds: default_ttl(),
        }
    }
}

fn default_max_capacity() -> u64 {
    10_000
}

fn default_time_to_live() -> u64 {
    300
}

fn default_ttl() -> u64 {
    60
}
