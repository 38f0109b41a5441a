//! API Handlers
//!
//! HTTP request handlers for the addon routes.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::addon::{build_manifest, MetaHandler, SimilarMoviesHandler};
use crate::cache::ResponseCache;
use crate::config::Config;
use crate::models::{HealthResponse, Manifest, MetaResponse, StatsResponse};
use crate::upstream::{CachedFetcher, TmdbClient, Upstream};

/// Application state shared across all handlers.
///
/// Holds the registered meta handler plus the cache for stats reporting.
#[derive(Clone)]
pub struct AppState {
    /// Capability declaration served to clients
    pub manifest: Arc<Manifest>,
    /// Registered meta handler
    pub meta_handler: Arc<dyn MetaHandler>,
    /// Shared response cache
    pub cache: Arc<RwLock<ResponseCache>>,
}

impl AppState {
    /// Creates a new AppState around an already-built handler and cache.
    pub fn new(meta_handler: Arc<dyn MetaHandler>, cache: Arc<RwLock<ResponseCache>>) -> Self {
        Self {
            manifest: Arc::new(build_manifest()),
            meta_handler,
            cache,
        }
    }

    /// Wires the similar-movies handler over the given upstream.
    pub fn with_upstream(
        upstream: Arc<dyn Upstream>,
        cache: ResponseCache,
        image_base_url: &str,
    ) -> Self {
        let cache = Arc::new(RwLock::new(cache));
        let fetcher = CachedFetcher::new(upstream, cache.clone());
        let handler = SimilarMoviesHandler::new(fetcher, image_base_url);
        Self::new(Arc::new(handler), cache)
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the TMDb client and a wall-clock cache with the configured TTL.
    pub fn from_config(config: &Config) -> Self {
        let upstream = TmdbClient::new(&config.api_base_url, &config.api_key);
        let cache = ResponseCache::new(Duration::from_secs(config.cache_ttl));
        Self::with_upstream(Arc::new(upstream), cache, &config.image_base_url)
    }
}

/// Handler for GET /manifest.json
pub async fn manifest_handler(State(state): State<AppState>) -> Json<Manifest> {
    Json(state.manifest.as_ref().clone())
}

/// Handler for GET /meta/:type/:id
///
/// Clients append `.json` to the id; it is not part of the id.
pub async fn meta_handler(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Json<MetaResponse> {
    let id = id.strip_suffix(".json").unwrap_or(&id);
    Json(state.meta_handler.handle(&kind, id).await)
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::new(&cache.stats(), cache.ttl().as_secs()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
