use std::sync::Arc;

use adressen::{AdressenError, SearchStrategy};
use adressen_mock::MockUpstream;
use serde_json::json;

use crate::helpers::{LOCATION_PATH, adressen, fixtures, location_ids, with_fixtures};

#[tokio::test]
async fn direct_search_issues_one_location_call() {
    let (mock, a) = with_fixtures(SearchStrategy::Direct);

    let report = a.search(fixtures::PHRASE).await.unwrap();

    let calls = mock.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].endpoint().path().ends_with(LOCATION_PATH));
    assert_eq!(calls[0].query_param("q"), Some(fixtures::PHRASE));
    assert_eq!(calls[0].query_param("c"), Some("10"));
    assert_eq!(calls[0].query_param("type"), Some("Housenumber"));

    // upstream lists 1001 twice
    assert_eq!(location_ids(&report.addresses), vec![json!(1001), json!(1002)]);
    assert_eq!(report.total_count(), 2);
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn enclosing_quotes_are_stripped() {
    let (mock, a) = with_fixtures(SearchStrategy::Direct);

    let report = a.search("\"Stationstraat 1 Gent\"").await.unwrap();

    assert_eq!(report.total_count(), 2);
    assert_eq!(mock.calls()[0].query_param("q"), Some(fixtures::PHRASE));
}

#[tokio::test]
async fn direct_results_carry_the_country() {
    let (_, a) = with_fixtures(SearchStrategy::Direct);

    let report = a.search(fixtures::PHRASE).await.unwrap();

    let names: Vec<&str> = report
        .addresses
        .iter()
        .map(adressen::AddressEnvelope::display_name)
        .collect();
    assert_eq!(
        names,
        vec![
            "Stationstraat 1, 9000 Gent, België",
            "Stationstraat 1, 9032 Gent, België"
        ]
    );
    assert!(report.addresses.iter().all(|e| e.country() == Some("België")));
}

#[tokio::test]
async fn empty_phrase_is_rejected_before_any_call() {
    let (mock, a) = with_fixtures(SearchStrategy::SuggestLocateMatch);

    for q in ["", "   ", "\"\"", "\"  \""] {
        let err = a.search(q).await.unwrap_err();
        assert!(matches!(err, AdressenError::InvalidArg(_)), "{q:?}: {err:?}");
    }
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn unknown_phrase_yields_empty_report() {
    let (_, a) = with_fixtures(SearchStrategy::Direct);

    let report = a.search("Nergensstraat 99").await.unwrap();

    assert!(report.addresses.is_empty());
    assert_eq!(report.total_count(), 0);
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn unreadable_body_is_an_empty_report_with_a_warning() {
    let mock = Arc::new(MockUpstream::builder().body(LOCATION_PATH, "<html>").build());
    let a = adressen(&mock, SearchStrategy::Direct);

    let report = a.search("Stationstraat").await.unwrap();

    assert!(report.addresses.is_empty());
    assert!(matches!(
        report.warnings.as_slice(),
        [AdressenError::Malformed { .. }]
    ));
}

#[tokio::test]
async fn transport_failure_propagates() {
    let mock = Arc::new(
        MockUpstream::builder()
            .fail_when(LOCATION_PATH, &[], Some(503))
            .build(),
    );
    let a = adressen(&mock, SearchStrategy::Direct);

    let err = a.search("Stationstraat").await.unwrap_err();

    assert_eq!(err.upstream_status(), Some(503));
    assert_eq!(err.http_status(), 502);
}
