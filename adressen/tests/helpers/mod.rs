// Re-export helpers so tests can `use helpers::*;`
use std::sync::Arc;

use adressen::{AddressEnvelope, Adressen, SearchStrategy};
use adressen_mock::MockUpstream;
use serde_json::Value;

pub use adressen_mock::fixtures;
pub use adressen_mock::{ADDRESS_MATCH_PATH, LOCATION_PATH, SUGGESTION_PATH};

/// Orchestrator over `mock` using `strategy` and otherwise default settings.
pub fn adressen(mock: &Arc<MockUpstream>, strategy: SearchStrategy) -> Adressen {
    Adressen::builder()
        .with_upstream(mock.clone())
        .search_strategy(strategy)
        .build()
        .unwrap()
}

/// Orchestrator over the fixture registry.
pub fn with_fixtures(strategy: SearchStrategy) -> (Arc<MockUpstream>, Adressen) {
    let mock = Arc::new(MockUpstream::with_fixtures());
    let a = adressen(&mock, strategy);
    (mock, a)
}

/// Location ids of a result list, in order.
pub fn location_ids(out: &[AddressEnvelope]) -> Vec<Value> {
    out.iter()
        .map(|e| e.as_location().expect("location envelope").id.clone())
        .collect()
}

/// Registry object ids (last path segment of the identificator) of a result list, in order.
pub fn match_ids(out: &[AddressEnvelope]) -> Vec<String> {
    out.iter()
        .map(|e| {
            let id = &e.as_match().expect("match envelope").identificator.id;
            id.rsplit('/').next().unwrap_or(id).to_string()
        })
        .collect()
}

/// Location body holding one bare record per id.
pub fn location_body(ids: &[u32]) -> String {
    let records: Vec<Value> = ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "ID": id,
                "LocationType": "Housenumber",
                "FormattedAddress": format!("Teststraat {id}, 1000 Brussel"),
                "Municipality": "Brussel",
                "Zipcode": "1000",
                "Thoroughfarename": "Teststraat",
                "Housenumber": id.to_string()
            })
        })
        .collect();
    serde_json::json!({ "LocationResult": records }).to_string()
}
