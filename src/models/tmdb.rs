//! Upstream (TMDb) payload shapes
//!
//! Only the fields the addon reads are modelled; everything else in the
//! TMDb response is ignored. Result records are kept raw on the page and
//! decoded one by one, so a single odd record never spoils the rest.

use serde::Deserialize;
use serde_json::Value;

/// One page of `/movie/{id}/similar`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimilarPage {
    /// Ranked results; missing or `null` decodes as empty
    #[serde(default)]
    pub results: Option<Vec<Value>>,
}

impl SimilarPage {
    /// Raw result records in upstream order.
    pub fn into_results(self) -> Vec<Value> {
        self.results.unwrap_or_default()
    }
}

/// A single movie record in a TMDb result list.
///
/// Text fields may be absent or `null` upstream; both read as empty.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovie {
    pub id: u64,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl TmdbMovie {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn release_date(&self) -> &str {
        self.release_date.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_similar_page_deserialize() {
        let json = r#"{
            "page": 1,
            "results": [
                {"id": 603, "title": "The Matrix", "release_date": "1999-03-31",
                 "poster_path": "/abc.jpg", "vote_average": 8.2},
                {"id": 604, "title": "The Matrix Reloaded", "release_date": "2003-05-15",
                 "poster_path": null}
            ],
            "total_pages": 1
        }"#;
        let page: SimilarPage = serde_json::from_str(json).unwrap();
        let results = page.into_results();
        assert_eq!(results.len(), 2);

        let first = TmdbMovie::deserialize(&results[0]).unwrap();
        assert_eq!(first.id, 603);
        assert_eq!(first.title(), "The Matrix");
        assert_eq!(first.poster_path.as_deref(), Some("/abc.jpg"));
        assert!(TmdbMovie::deserialize(&results[1]).unwrap().poster_path.is_none());
    }

    #[test]
    fn test_missing_optional_fields() {
        let movie = TmdbMovie::deserialize(&json!({"id": 7})).unwrap();

        assert_eq!(movie.title(), "");
        assert_eq!(movie.release_date(), "");
        assert!(movie.poster_path.is_none());
    }

    #[test]
    fn test_null_text_fields() {
        let movie = TmdbMovie::deserialize(&json!({
            "id": 7, "title": null, "release_date": null, "poster_path": null
        }))
        .unwrap();

        assert_eq!(movie.title(), "");
        assert_eq!(movie.release_date(), "");
    }

    #[test]
    fn test_missing_or_null_results() {
        let page: SimilarPage = serde_json::from_str(r#"{"status_code": 34}"#).unwrap();
        assert!(page.into_results().is_empty());

        let page: SimilarPage = serde_json::from_str(r#"{"results": null}"#).unwrap();
        assert!(page.into_results().is_empty());
    }
}
