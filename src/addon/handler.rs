//! Similar-movies meta handler
//!
//! Answers `meta` requests for movies with the list of similar titles.

use async_trait::async_trait;
use tracing::{debug, error};

use crate::addon::{map_similar, MetaHandler};
use crate::error::{AddonError, Result};
use crate::models::{Meta, MetaResponse, SimilarItem};
use crate::upstream::{similar_movies_path, CachedFetcher};

/// Content type this addon serves
pub const MOVIE_TYPE: &str = "movie";

/// Display name of the returned meta record
pub const META_NAME: &str = "Similar Movies";

/// Prefix stripped from incoming ids to get the upstream id
pub const ID_PREFIX: &str = "tt";

/// Meta handler backed by the cached TMDb fetcher.
#[derive(Clone)]
pub struct SimilarMoviesHandler {
    fetcher: CachedFetcher,
    image_base_url: String,
}

impl SimilarMoviesHandler {
    pub fn new(fetcher: CachedFetcher, image_base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            image_base_url: image_base_url.into(),
        }
    }

    /// Similar movies for an upstream id; empty when upstream is unavailable.
    pub async fn similar_movies(&self, movie_id: &str) -> Vec<SimilarItem> {
        let data = self.fetcher.fetch(&similar_movies_path(movie_id)).await.ok();
        map_similar(data.as_ref(), &self.image_base_url)
    }

    async fn resolve(&self, kind: &str, id: &str) -> Result<MetaResponse> {
        let movie_id = upstream_id(id)?;
        let videos = self.similar_movies(movie_id).await;
        debug!("Resolved {} similar movies for {}", videos.len(), id);

        Ok(MetaResponse::new(Meta {
            id: id.to_string(),
            kind: kind.to_string(),
            name: META_NAME.to_string(),
            videos,
        }))
    }
}

#[async_trait]
impl MetaHandler for SimilarMoviesHandler {
    async fn handle(&self, kind: &str, id: &str) -> MetaResponse {
        if kind != MOVIE_TYPE {
            return MetaResponse::empty();
        }

        match self.resolve(kind, id).await {
            Ok(response) => response,
            Err(e) => {
                error!("Meta handler failed for {}/{}: {}", kind, id, e);
                MetaResponse::empty()
            }
        }
    }
}

/// Strips the `tt` prefix and checks the rest is safe to splice into a path.
///
/// Ids without the prefix are used as they are.
pub fn upstream_id(id: &str) -> Result<&str> {
    let movie_id = id.strip_prefix(ID_PREFIX).unwrap_or(id);
    let valid = !movie_id.is_empty()
        && movie_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(movie_id)
    } else {
        Err(AddonError::InvalidId(id.to_string()))
    }
}
