use std::sync::Arc;
use std::time::Duration;

use adressen::SearchStrategy;
use adressen_mock::MockUpstream;
use serde_json::json;

use crate::helpers::{LOCATION_PATH, SUGGESTION_PATH, adressen, location_body, location_ids};

fn staggered(delays_ms: [u64; 3]) -> Arc<MockUpstream> {
    Arc::new(
        MockUpstream::builder()
            .body(SUGGESTION_PATH, r#"{"SuggestionResult":["a","b","c"]}"#)
            .delayed_body_when(
                LOCATION_PATH,
                &[("q", "a")],
                Duration::from_millis(delays_ms[0]),
                location_body(&[1, 2]),
            )
            .delayed_body_when(
                LOCATION_PATH,
                &[("q", "b")],
                Duration::from_millis(delays_ms[1]),
                location_body(&[2, 3]),
            )
            .delayed_body_when(
                LOCATION_PATH,
                &[("q", "c")],
                Duration::from_millis(delays_ms[2]),
                location_body(&[4]),
            )
            .build(),
    )
}

#[tokio::test(start_paused = true)]
async fn merge_follows_request_order_not_completion_order() {
    // the first suggestion settles last
    let mock = staggered([300, 20, 10]);
    let a = adressen(&mock, SearchStrategy::SuggestThenLocate);

    let report = a.search("x").await.unwrap();

    assert_eq!(
        location_ids(&report.addresses),
        vec![json!(1), json!(2), json!(3), json!(4)]
    );
}

#[tokio::test(start_paused = true)]
async fn stage_latency_is_bounded_by_the_slowest_call() {
    let mock = staggered([100, 100, 100]);
    let a = adressen(&mock, SearchStrategy::SuggestThenLocate);

    let start = tokio::time::Instant::now();
    let report = a.search("x").await.unwrap();
    let elapsed = start.elapsed();

    assert_eq!(report.total_count(), 4);
    assert!(
        elapsed < Duration::from_millis(200),
        "location calls ran sequentially: {elapsed:?}"
    );
}
