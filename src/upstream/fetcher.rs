//! Cache-backed fetcher
//!
//! Serves upstream paths from the [`ResponseCache`] while fresh and falls
//! through to the [`Upstream`] otherwise. Only successful bodies are stored.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

use crate::cache::ResponseCache;
use crate::error::Result;
use crate::upstream::Upstream;

/// Upstream access with a TTL cache in front of it.
#[derive(Clone)]
pub struct CachedFetcher {
    upstream: Arc<dyn Upstream>,
    cache: Arc<RwLock<ResponseCache>>,
}

impl CachedFetcher {
    pub fn new(upstream: Arc<dyn Upstream>, cache: Arc<RwLock<ResponseCache>>) -> Self {
        Self { upstream, cache }
    }

    #[cfg(test)]
    pub(crate) fn cache(&self) -> Arc<RwLock<ResponseCache>> {
        self.cache.clone()
    }

    /// Returns the JSON body for `path`, from cache when fresh.
    ///
    /// The lock is released before the upstream call, so two concurrent
    /// misses on the same path both go upstream and the later write wins.
    pub async fn fetch(&self, path: &str) -> Result<Value> {
        if let Some(data) = self.cache.write().await.get(path) {
            debug!("Cache hit for {}", path);
            return Ok(data);
        }

        debug!("Cache miss for {}, fetching upstream", path);
        match self.upstream.get_json(path).await {
            Ok(data) => {
                self.cache
                    .write()
                    .await
                    .insert(path.to_string(), data.clone());
                Ok(data)
            }
            Err(e) if e.is_upstream() => {
                warn!("Upstream fetch for {} failed: {}", path, e);
                self.cache.write().await.record_upstream_failure();
                Err(e)
            }
            Err(e) => {
                error!("Fetch for {} failed: {}", path, e);
                Err(e)
            }
        }
    }
}
