use std::collections::HashSet;
use std::sync::Arc;

use adressen::{SearchStrategy, UpstreamRequest};
use adressen_mock::MockUpstream;
use proptest::prelude::*;

use crate::helpers::{LOCATION_PATH, SUGGESTION_PATH, adressen, location_body};

proptest! {
    #[test]
    fn count_matches_list_and_ids_are_unique(
        per_suggestion in proptest::collection::vec(
            proptest::collection::vec(0u32..8, 0..6),
            1..5,
        )
    ) {
        let tokens: Vec<String> = (0..per_suggestion.len()).map(|i| format!("s{i}")).collect();
        let suggestions = serde_json::json!({ "SuggestionResult": tokens }).to_string();
        let bodies = per_suggestion.clone();
        let mock = Arc::new(
            MockUpstream::builder()
                .body(SUGGESTION_PATH, suggestions)
                .route(LOCATION_PATH, move |req: &UpstreamRequest| {
                    let idx: usize = req
                        .query_param("q")
                        .and_then(|q| q.trim_start_matches('s').parse().ok())
                        .unwrap_or(0);
                    Ok(location_body(&bodies[idx]))
                })
                .build(),
        );
        let a = adressen(&mock, SearchStrategy::SuggestThenLocate);

        let report = tokio_test::block_on(a.search("x")).unwrap();

        let ids: Vec<String> = report
            .addresses
            .iter()
            .map(|e| e.as_location().unwrap().id.to_string())
            .collect();
        let unique: HashSet<&String> = ids.iter().collect();
        let expected: HashSet<String> = per_suggestion
            .iter()
            .flatten()
            .map(ToString::to_string)
            .collect();

        prop_assert_eq!(report.total_count(), report.addresses.len());
        prop_assert_eq!(unique.len(), ids.len());
        prop_assert_eq!(unique.len(), expected.len());

        let wire = serde_json::to_value(&report).unwrap();
        prop_assert_eq!(wire["totaalAantal"].as_u64(), Some(ids.len() as u64));
    }
}
