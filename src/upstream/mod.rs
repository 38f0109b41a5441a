//! Upstream Module
//!
//! TMDb access: the raw HTTP client and the cache-backed fetcher on top.

mod client;
mod fetcher;

pub use client::{TmdbClient, Upstream};
pub use fetcher::CachedFetcher;

#[cfg(test)]
pub(crate) use fetcher::tests::FakeUpstream;

/// Upstream path listing movies similar to `movie_id`.
pub fn similar_movies_path(movie_id: &str) -> String {
    format!("/movie/{}/similar", movie_id)
}
