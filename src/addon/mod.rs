//! Addon Module
//!
//! The addon's capabilities: its manifest, the meta handler contract, and the
//! similar-movies implementation of it.

mod handler;
mod manifest;
mod mapper;

#[cfg(test)]
mod property_tests;

use async_trait::async_trait;

use crate::models::MetaResponse;

pub use handler::{upstream_id, SimilarMoviesHandler, ID_PREFIX, META_NAME, MOVIE_TYPE};
pub use manifest::{build_manifest, ADDON_ID, ADDON_NAME};
pub use mapper::{map_similar, MAX_SIMILAR};

/// Answers `meta` requests routed by the hosting layer.
///
/// Implementations never fail: every problem is folded into
/// [`MetaResponse::empty`] or an empty video list.
#[async_trait]
pub trait MetaHandler: Send + Sync {
    async fn handle(&self, kind: &str, id: &str) -> MetaResponse;
}
