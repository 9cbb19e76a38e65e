//! Configuration types shared across orchestrators and upstream clients.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default location/geocoding endpoint (free-text and coordinate lookups).
pub const DEFAULT_LOCATION_ENDPOINT: &str = "https://geo.api.vlaanderen.be/geolocation/v4/Location";
/// Default fuzzy suggestion endpoint.
pub const DEFAULT_SUGGESTION_ENDPOINT: &str =
    "https://geo.api.vlaanderen.be/geolocation/v4/Suggestion";
/// Default structured address-match endpoint.
pub const DEFAULT_ADDRESS_MATCH_ENDPOINT: &str = "https://basisregisters.vlaanderen.be/api/v2/adressen";
/// The upstream registries only hold addresses in this country.
pub const DEFAULT_COUNTRY: &str = "België";
/// Language tag whose display names receive the country suffix.
pub const DEFAULT_PRIMARY_LANGUAGE: &str = "nl";

/// Pipeline used to resolve a free-text search.
///
/// The upstream registries changed shape over time; each variant reproduces
/// one of the observed pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// One location call with the phrase, restricted to house-number granularity.
    #[default]
    Direct,
    /// Fuzzy suggestion call, then one location call per suggestion, merged by location identity.
    SuggestThenLocate,
    /// As `SuggestThenLocate`, then one address-match call per unique location,
    /// merged by address-match identity.
    SuggestLocateMatch,
}

/// Absolute URLs of the upstream endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// Fuzzy suggestion endpoint returning `SuggestionResult`.
    pub suggestion: String,
    /// Location endpoint returning `LocationResult`.
    pub location: String,
    /// Address-match endpoint returning `adressen` or a single record.
    pub address_match: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            suggestion: DEFAULT_SUGGESTION_ENDPOINT.to_string(),
            location: DEFAULT_LOCATION_ENDPOINT.to_string(),
            address_match: DEFAULT_ADDRESS_MATCH_ENDPOINT.to_string(),
        }
    }
}

/// Global configuration for the `Adressen` orchestrator.
///
/// Immutable once handed to the orchestrator; every resolution reads from it
/// and nothing writes back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdressenConfig {
    /// Upstream endpoint URLs.
    pub endpoints: Endpoints,
    /// Country written onto every address envelope.
    pub default_country: String,
    /// Language tag whose display names receive the `", <country>"` suffix.
    pub primary_language: String,
    /// Free-text search pipeline.
    pub search_strategy: SearchStrategy,
    /// Result cap (`c`) for the direct location search.
    pub search_result_count: u32,
    /// Location granularity (`type`) forced on the direct location search.
    pub search_location_type: Option<String>,
    /// Result cap (`c`) for the fuzzy suggestion call.
    pub suggestion_count: u32,
    /// Per-upstream-call timeout.
    pub upstream_timeout: Duration,
    /// Optional deadline for a whole fanned-out stage.
    pub request_timeout: Option<Duration>,
}

impl Default for AdressenConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            default_country: DEFAULT_COUNTRY.to_string(),
            primary_language: DEFAULT_PRIMARY_LANGUAGE.to_string(),
            search_strategy: SearchStrategy::default(),
            search_result_count: 10,
            search_location_type: Some("Housenumber".to_string()),
            suggestion_count: 5,
            upstream_timeout: Duration::from_secs(5),
            request_timeout: None,
        }
    }
}
