use std::sync::Arc;

use adressen::{AdressenError, SearchStrategy};
use adressen_mock::MockUpstream;
use serde_json::json;

use crate::helpers::{
    ADDRESS_MATCH_PATH, LOCATION_PATH, SUGGESTION_PATH, adressen, fixtures, location_body,
    location_ids, match_ids,
};

#[tokio::test]
async fn one_failed_location_source_becomes_a_warning() {
    let mock = Arc::new(
        fixtures::install(
            MockUpstream::builder().fail_when(
                LOCATION_PATH,
                &[("q", fixtures::SUGGESTION_SINT_DENIJS)],
                Some(500),
            ),
        )
        .build(),
    );
    let a = adressen(&mock, SearchStrategy::SuggestThenLocate);

    let report = a.search(fixtures::PHRASE).await.unwrap();

    assert_eq!(location_ids(&report.addresses), vec![json!(1001)]);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].upstream_status(), Some(500));
}

#[tokio::test]
async fn malformed_match_body_is_absorbed() {
    let mock = Arc::new(
        fixtures::install(MockUpstream::builder().body_when(
            ADDRESS_MATCH_PATH,
            &[("Postcode", "9032")],
            r#"{"identificator": 7}"#,
        ))
        .build(),
    );
    let a = adressen(&mock, SearchStrategy::SuggestLocateMatch);

    let report = a.search(fixtures::PHRASE).await.unwrap();

    assert_eq!(match_ids(&report.addresses), vec!["20470097", "20470098"]);
    assert!(matches!(
        report.warnings.as_slice(),
        [AdressenError::Malformed { .. }]
    ));
}

#[tokio::test]
async fn every_source_failing_fails_the_search() {
    let mock = Arc::new(
        MockUpstream::builder()
            .body(SUGGESTION_PATH, r#"{"SuggestionResult":["a","b","c"]}"#)
            .fail_when(LOCATION_PATH, &[], None)
            .build(),
    );
    let a = adressen(&mock, SearchStrategy::SuggestThenLocate);

    let err = a.search("x").await.unwrap_err();

    match err {
        AdressenError::AllUpstreamsFailed(errors) => assert_eq!(errors.len(), 3),
        other => panic!("unexpected: {other:?}"),
    }
    assert_eq!(mock.calls_to(LOCATION_PATH).len(), 3);
}

#[tokio::test]
async fn single_source_stage_failing_returns_its_error() {
    let mock = Arc::new(
        MockUpstream::builder()
            .body(SUGGESTION_PATH, r#"{"SuggestionResult":["a"]}"#)
            .fail_when(LOCATION_PATH, &[], Some(502))
            .build(),
    );
    let a = adressen(&mock, SearchStrategy::SuggestThenLocate);

    let err = a.search("x").await.unwrap_err();

    assert_eq!(err.upstream_status(), Some(502));
}

#[tokio::test]
async fn failed_suggestion_call_propagates() {
    let mock = Arc::new(
        MockUpstream::builder()
            .fail_when(SUGGESTION_PATH, &[], Some(500))
            .body(LOCATION_PATH, location_body(&[1]))
            .build(),
    );
    let a = adressen(&mock, SearchStrategy::SuggestLocateMatch);

    let err = a.search("x").await.unwrap_err();

    assert!(matches!(err, AdressenError::Transport { status: Some(500), .. }));
    assert!(mock.calls_to(LOCATION_PATH).is_empty());
}

#[tokio::test]
async fn unreadable_suggestions_yield_an_empty_report_with_a_warning() {
    let mock = Arc::new(
        MockUpstream::builder()
            .body(SUGGESTION_PATH, r#"{"SuggestionResult": "oops"}"#)
            .build(),
    );
    let a = adressen(&mock, SearchStrategy::SuggestThenLocate);

    let report = a.search("x").await.unwrap();

    assert!(report.addresses.is_empty());
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn empty_match_roots_yield_an_empty_report() {
    let mock = Arc::new(
        fixtures::install(MockUpstream::builder().body(ADDRESS_MATCH_PATH, "{}")).build(),
    );
    let a = adressen(&mock, SearchStrategy::SuggestLocateMatch);

    let report = a.search(fixtures::PHRASE).await.unwrap();

    assert!(report.addresses.is_empty());
    assert!(report.warnings.is_empty());
    assert_eq!(mock.calls_to(ADDRESS_MATCH_PATH).len(), 2);
}
