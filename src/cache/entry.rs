//! Cache Entry Module
//!
//! Defines a single cached upstream response and its freshness check.

use serde_json::Value;

// == Cache Entry ==
/// A parsed upstream body together with the time it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The parsed JSON body
    pub data: Value,
    /// Storage timestamp (Unix milliseconds)
    pub stored_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with `now_ms`.
    pub fn new(data: Value, now_ms: u64) -> Self {
        Self {
            data,
            stored_at: now_ms,
        }
    }

    // == Is Fresh ==
    /// Checks whether the entry is still within its TTL.
    ///
    /// Boundary condition: once exactly `ttl_ms` has elapsed the entry is
    /// stale. A clock that reads earlier than `stored_at` counts as zero age.
    pub fn is_fresh(&self, now_ms: u64, ttl_ms: u64) -> bool {
        self.age_ms(now_ms) < ttl_ms
    }

    // == Age ==
    /// Milliseconds elapsed since the entry was stored.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.stored_at)
    }
}
