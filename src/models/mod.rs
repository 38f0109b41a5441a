//! Wire models
//!
//! Upstream TMDb payloads, the addon protocol bodies served to clients, and
//! the operational endpoint responses.

pub mod responses;
pub mod stremio;
pub mod tmdb;

// Re-export commonly used types
pub use responses::{HealthResponse, StatsResponse};
pub use stremio::{Manifest, Meta, MetaResponse, SimilarItem};
pub use tmdb::{SimilarPage, TmdbMovie};
