//! Listing cache configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the in-memory template listing cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached listings.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
    /// Time-to-live for cached listings in seconds.
    #[serde(default = "default_ttl")]
    pub time_to_live_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
            time_to_live_seconds: default_ttl(),
        }
    }
}

fn default_max_capacity() -> u64 {
    1024
}

fn default_ttl() -> u64 {
    60
}
