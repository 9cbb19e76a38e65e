use std::sync::Arc;
use std::time::Duration;

use adressen::{Adressen, AdressenConfig, AdressenError, Endpoints, SearchStrategy};
use adressen_mock::MockUpstream;

#[test]
fn build_requires_an_upstream() {
    let err = Adressen::builder().build().err().unwrap();
    assert!(err.is_validation(), "unexpected: {err:?}");
}

#[test]
fn build_rejects_relative_endpoint() {
    let err = Adressen::builder()
        .with_upstream(Arc::new(MockUpstream::builder().build()))
        .endpoints(Endpoints {
            location: "/geolocation/v4/Location".into(),
            ..Endpoints::default()
        })
        .build()
        .err()
        .unwrap();
    match err {
        AdressenError::InvalidArg(msg) => assert!(msg.contains("location"), "{msg}"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn build_rejects_zero_result_cap() {
    let err = Adressen::builder()
        .with_upstream(Arc::new(MockUpstream::builder().build()))
        .suggestion_count(0)
        .build()
        .err()
        .unwrap();
    assert!(err.is_validation());
}

#[test]
fn modifiers_apply_on_top_of_config() {
    let base = AdressenConfig {
        default_country: "Belgique".into(),
        ..AdressenConfig::default()
    };
    let a = Adressen::builder()
        .with_upstream(Arc::new(MockUpstream::builder().build()))
        .config(base)
        .primary_language("fr")
        .search_strategy(SearchStrategy::SuggestThenLocate)
        .upstream_timeout(Duration::from_millis(250))
        .request_timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let cfg = a.config();
    assert_eq!(cfg.default_country, "Belgique");
    assert_eq!(cfg.primary_language, "fr");
    assert_eq!(cfg.search_strategy, SearchStrategy::SuggestThenLocate);
    assert_eq!(cfg.upstream_timeout, Duration::from_millis(250));
    assert_eq!(cfg.request_timeout, Some(Duration::from_secs(2)));
}

#[tokio::test]
async fn custom_country_reaches_the_envelopes() {
    let mock = Arc::new(MockUpstream::with_fixtures());
    let a = Adressen::builder()
        .with_upstream(mock)
        .default_country("Belgique")
        .build()
        .unwrap();

    let report = a.search(adressen_mock::fixtures::PHRASE).await.unwrap();
    assert!(!report.addresses.is_empty());
    for env in &report.addresses {
        assert_eq!(env.country(), Some("Belgique"));
        assert!(env.display_name().ends_with(", Belgique"));
    }
}
