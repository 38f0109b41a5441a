//! Similar-movie mapper
//!
//! Turns a TMDb `/similar` payload into the addon's video entries.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::models::{SimilarItem, SimilarPage, TmdbMovie};

/// Maximum number of similar movies returned per request
pub const MAX_SIMILAR: usize = 10;

/// Maps an upstream payload to at most [`MAX_SIMILAR`] items in upstream order.
///
/// An absent payload, one without `results`, or one whose `results` is not a
/// list yields an empty list. The cap is applied before records are decoded;
/// a record without a numeric `id` is skipped with a warning.
pub fn map_similar(payload: Option<&Value>, image_base_url: &str) -> Vec<SimilarItem> {
    let Some(payload) = payload else {
        return Vec::new();
    };

    let page = match SimilarPage::deserialize(payload) {
        Ok(page) => page,
        Err(e) => {
            warn!("Unexpected similar-movies payload: {}", e);
            return Vec::new();
        }
    };

    let results = page.into_results();
    results
        .iter()
        .take(MAX_SIMILAR)
        .filter_map(|record| match TmdbMovie::deserialize(record) {
            Ok(movie) => Some(to_similar_item(movie, image_base_url)),
            Err(e) => {
                warn!("Skipping unreadable similar-movie record: {}", e);
                None
            }
        })
        .collect()
}

fn to_similar_item(movie: TmdbMovie, image_base_url: &str) -> SimilarItem {
    SimilarItem {
        id: format!("tt{}", movie.id),
        title: movie.title().to_string(),
        released: movie.release_date().to_string(),
        thumbnail: movie
            .poster_path
            .map(|poster| format!("{}{}", image_base_url, poster)),
    }
}
