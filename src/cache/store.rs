//! Response Cache Module
//!
//! Table of upstream responses keyed by request path, with time-based
//! freshness. Entries are never removed; a stale entry simply stops being
//! served and is overwritten by the next successful fetch.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock};

// == Response Cache ==
/// Upstream response table with a fixed TTL and injectable clock.
pub struct ResponseCache {
    /// Path -> stored response
    entries: HashMap<String, CacheEntry>,
    /// Lookup statistics
    stats: CacheStats,
    /// Freshness window in milliseconds
    ttl_ms: u64,
    /// Time source
    clock: Arc<dyn Clock>,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates an empty cache on the wall clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Creates an empty cache reading time from `clock`.
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl_ms: ttl.as_millis() as u64,
            clock,
        }
    }

    // == Get ==
    /// Returns the stored data for `key` if it is still fresh.
    ///
    /// Stale entries are left in place and counted as misses.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let now = self.clock.now_ms();
        match self.entries.get(key) {
            Some(entry) if entry.is_fresh(now, self.ttl_ms) => {
                self.stats.record_hit();
                Some(entry.data.clone())
            }
            _ => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Insert ==
    /// Stores `data` under `key`, replacing any previous entry.
    pub fn insert(&mut self, key: String, data: Value) {
        let entry = CacheEntry::new(data, self.clock.now_ms());
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    /// Returns the raw entry for `key`, fresh or not.
    #[cfg(test)]
    pub(crate) fn entry(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    pub fn record_upstream_failure(&mut self) {
        self.stats.record_upstream_failure();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ResponseCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseCache")
            .field("entries", &self.entries.len())
            .field("ttl_ms", &self.ttl_ms)
            .field("stats", &self.stats)
            .finish()
    }
}
