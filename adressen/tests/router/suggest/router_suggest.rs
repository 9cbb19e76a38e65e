use std::sync::Arc;

use adressen::{AdressenError, CoordinateQuery, SearchStrategy};
use adressen_mock::MockUpstream;
use serde_json::json;

use crate::helpers::{LOCATION_PATH, adressen, location_ids, with_fixtures};

#[tokio::test]
async fn coordinate_lookup_sends_latlon_and_count() {
    let (mock, a) = with_fixtures(SearchStrategy::Direct);

    let out = a
        .suggest_from_latlon(&CoordinateQuery::new(51.0357, 3.7101).count(5))
        .await
        .unwrap();

    assert_eq!(location_ids(&out), vec![json!(1001), json!(1001)]);
    assert!(out.iter().all(|e| e.display_name().ends_with(", België")));

    let calls = mock.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].query_param("latlon"), Some("51.0357,3.7101"));
    assert_eq!(calls[0].query_param("c"), Some("5"));
}

#[tokio::test]
async fn count_is_omitted_when_not_given() {
    let (mock, a) = with_fixtures(SearchStrategy::Direct);

    a.suggest_from_latlon(&CoordinateQuery::new(51.0357, 3.7101))
        .await
        .unwrap();

    assert_eq!(mock.calls()[0].query_param("c"), None);
}

#[tokio::test]
async fn invalid_coordinates_are_rejected_before_any_call() {
    let (mock, a) = with_fixtures(SearchStrategy::Direct);

    for q in [
        CoordinateQuery::new(f64::NAN, 3.7),
        CoordinateQuery::new(51.0, f64::INFINITY),
        CoordinateQuery::new(51.0, 3.7).count(0),
    ] {
        let err = a.suggest_from_latlon(&q).await.unwrap_err();
        assert!(err.is_validation(), "{q:?}: {err:?}");
    }
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn upstream_failure_propagates() {
    let mock = Arc::new(
        MockUpstream::builder()
            .fail_when(LOCATION_PATH, &[], Some(500))
            .build(),
    );
    let a = adressen(&mock, SearchStrategy::Direct);

    let err = a
        .suggest_from_latlon(&CoordinateQuery::new(51.0, 3.7))
        .await
        .unwrap_err();

    assert!(matches!(err, AdressenError::Transport { status: Some(500), .. }));
}
