use std::collections::HashSet;

use adressen::SearchStrategy;
use serde_json::json;

use crate::helpers::{
    ADDRESS_MATCH_PATH, LOCATION_PATH, SUGGESTION_PATH, fixtures, location_ids, match_ids,
    with_fixtures,
};

#[tokio::test]
async fn suggest_then_locate_merges_by_location_identity() {
    let (mock, a) = with_fixtures(SearchStrategy::SuggestThenLocate);

    let report = a.search(fixtures::PHRASE).await.unwrap();

    let suggestion_calls = mock.calls_to(SUGGESTION_PATH);
    assert_eq!(suggestion_calls.len(), 1);
    assert_eq!(suggestion_calls[0].query_param("q"), Some(fixtures::PHRASE));
    assert_eq!(suggestion_calls[0].query_param("c"), Some("5"));

    // one location call per suggestion, duplicates included
    let location_calls = mock.calls_to(LOCATION_PATH);
    assert_eq!(location_calls.len(), 3);
    assert!(location_calls.iter().all(|c| c.query_param("c") == Some("1")));
    assert!(mock.calls_to(ADDRESS_MATCH_PATH).is_empty());

    assert_eq!(location_ids(&report.addresses), vec![json!(1001), json!(1002)]);
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn suggest_locate_match_end_to_end() {
    let (mock, a) = with_fixtures(SearchStrategy::SuggestLocateMatch);

    let report = a.search("\"Stationstraat 1 Gent\"").await.unwrap();

    assert_eq!(mock.calls_to(SUGGESTION_PATH).len(), 1);
    assert_eq!(mock.calls_to(LOCATION_PATH).len(), 3);
    // one match call per unique location
    let match_calls = mock.calls_to(ADDRESS_MATCH_PATH);
    assert_eq!(match_calls.len(), 2);
    assert_eq!(match_calls[0].query_param("GemeenteNaam"), Some("Gent"));
    assert_eq!(match_calls[0].query_param("Straatnaam"), Some("Stationstraat"));
    assert_eq!(match_calls[0].query_param("Huisnummer"), Some("1"));

    let ids = match_ids(&report.addresses);
    assert_eq!(ids, vec!["20470097", "20470098", "30000001"]);
    let unique: HashSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
    assert_eq!(report.total_count(), report.addresses.len());
}

#[tokio::test]
async fn matched_names_are_suffixed_only_in_the_primary_language() {
    let (_, a) = with_fixtures(SearchStrategy::SuggestLocateMatch);

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
            "Rue de la Gare 1 boîte 1, 9000 Gand",
            "Stationstraat 1, 9032 Gent, België",
        ]
    );
    assert!(report.addresses.iter().all(|e| e.country() == Some("België")));
}

#[tokio::test]
async fn no_suggestions_means_no_fan_out() {
    let (mock, a) = with_fixtures(SearchStrategy::SuggestLocateMatch);

    let report = a.search("Nergensstraat 99").await.unwrap();

    assert!(report.addresses.is_empty());
    assert!(report.warnings.is_empty());
    assert_eq!(mock.call_count(), 1);
}
