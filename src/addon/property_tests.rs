//! Property-Based Tests for the addon
//!
//! Mapper bounds and ordering, and the fetch-count guarantee of the cached
//! handler path.

use proptest::prelude::*;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::addon::{map_similar, MetaHandler, SimilarMoviesHandler, MAX_SIMILAR};
use crate::cache::{ManualClock, ResponseCache};
use crate::config::DEFAULT_IMAGE_BASE_URL;
use crate::upstream::{similar_movies_path, CachedFetcher, FakeUpstream};

const TEST_TTL: Duration = Duration::from_secs(3600);

// == Strategies ==
fn upstream_movie_strategy() -> impl Strategy<Value = Value> {
    (
        1u64..10_000_000,
        prop::option::of("[A-Za-z0-9 ]{0,32}"),
        prop::option::of("[0-9]{4}-[0-9]{2}-[0-9]{2}"),
        prop::option::of("/[a-z0-9]{8}\\.jpg"),
    )
        .prop_map(|(id, title, date, poster)| {
            json!({"id": id, "title": title, "release_date": date, "poster_path": poster})
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // The mapped list is a prefix of the upstream list, capped at ten, even
    // when text fields are null.
    #[test]
    fn prop_mapper_is_capped_prefix(movies in prop::collection::vec(upstream_movie_strategy(), 0..30)) {
        let payload = json!({ "results": movies });
        let items = map_similar(Some(&payload), DEFAULT_IMAGE_BASE_URL);

        prop_assert_eq!(items.len(), movies.len().min(MAX_SIMILAR));
        for (item, movie) in items.iter().zip(movies.iter()) {
            prop_assert_eq!(&item.id, &format!("tt{}", movie["id"]));
            prop_assert_eq!(item.title.as_str(), movie["title"].as_str().unwrap_or(""));
            prop_assert_eq!(item.released.as_str(), movie["release_date"].as_str().unwrap_or(""));
            prop_assert_eq!(item.thumbnail.is_some(), !movie["poster_path"].is_null());
        }
    }

    // Repeated requests for one id inside the TTL reach upstream once.
    #[test]
    fn prop_one_upstream_call_per_ttl_window(
        movie_id in 1u64..10_000_000,
        repeats in 1usize..8,
        step_ms in 0u64..(TEST_TTL.as_millis() as u64 / 8),
    ) {
        let path = similar_movies_path(&movie_id.to_string());
        let upstream = Arc::new(FakeUpstream::with_body(&path, json!({"results": []})));
        let clock = Arc::new(ManualClock::new(0));
        let cache = Arc::new(RwLock::new(ResponseCache::with_clock(TEST_TTL, clock.clone())));
        let handler = SimilarMoviesHandler::new(
            CachedFetcher::new(upstream.clone(), cache),
            DEFAULT_IMAGE_BASE_URL,
        );
        let id = format!("tt{}", movie_id);

        tokio_test::block_on(async {
            for _ in 0..repeats {
                handler.handle("movie", &id).await;
                clock.advance(Duration::from_millis(step_ms));
            }
        });
        prop_assert_eq!(upstream.calls(), 1);

        clock.advance(TEST_TTL);
        tokio_test::block_on(handler.handle("movie", &id));
        prop_assert_eq!(upstream.calls(), 2);
    }
}
