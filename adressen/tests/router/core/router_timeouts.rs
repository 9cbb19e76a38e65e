use std::sync::Arc;
use std::time::Duration;

use adressen::{Adressen, AdressenError, SearchStrategy};
use adressen_mock::MockUpstream;

use crate::helpers::{LOCATION_PATH, SUGGESTION_PATH, location_body};

#[tokio::test(start_paused = true)]
async fn slow_single_call_surfaces_upstream_timeout() {
    let mock = Arc::new(
        MockUpstream::builder()
            .delayed_body_when(LOCATION_PATH, &[], Duration::from_secs(30), location_body(&[1]))
            .build(),
    );
    let a = Adressen::builder()
        .with_upstream(mock)
        .upstream_timeout(Duration::from_secs(1))
        .build()
        .unwrap();

    let err = a.search("Teststraat 1").await.unwrap_err();
    assert_eq!(err.http_status(), 504);
    match err {
        AdressenError::UpstreamTimeout {
            upstream,
            capability,
        } => {
            assert_eq!(upstream, "adressen-mock");
            assert_eq!(capability, "search");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn stage_deadline_fails_the_whole_stage() {
    let mock = Arc::new(
        MockUpstream::builder()
            .body(SUGGESTION_PATH, r#"{"SuggestionResult":["a","b"]}"#)
            .body_when(LOCATION_PATH, &[("q", "a")], location_body(&[1]))
            .delayed_body_when(
                LOCATION_PATH,
                &[("q", "b")],
                Duration::from_secs(3),
                location_body(&[2]),
            )
            .build(),
    );
    let a = Adressen::builder()
        .with_upstream(mock)
        .search_strategy(SearchStrategy::SuggestThenLocate)
        .request_timeout(Duration::from_secs(1))
        .build()
        .unwrap();

    let err = a.search("x").await.unwrap_err();
    assert_eq!(err, AdressenError::request_timeout("location"));
}

#[tokio::test(start_paused = true)]
async fn all_sources_timing_out_collapse_to_request_timeout() {
    let mock = Arc::new(
        MockUpstream::builder()
            .body(SUGGESTION_PATH, r#"{"SuggestionResult":["a","b"]}"#)
            .delayed_body_when(LOCATION_PATH, &[], Duration::from_secs(10), location_body(&[1]))
            .build(),
    );
    let a = Adressen::builder()
        .with_upstream(mock)
        .search_strategy(SearchStrategy::SuggestThenLocate)
        .upstream_timeout(Duration::from_secs(1))
        .build()
        .unwrap();

    let err = a.search("x").await.unwrap_err();
    assert_eq!(err, AdressenError::request_timeout("location"));
}
