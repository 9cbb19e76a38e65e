//! Deterministic upstream bodies for the "Stationstraat 1 Gent" scenario.
//!
//! Bodies are shaped exactly like the live registries' responses so the
//! whole normalization pipeline runs against them.

use crate::{ADDRESS_MATCH_PATH, LOCATION_PATH, MockUpstreamBuilder, SUGGESTION_PATH};

pub mod address_match;
pub mod location;
pub mod suggestion;

/// Free-text phrase the fixtures answer for.
pub const PHRASE: &str = "Stationstraat 1 Gent";
/// First (and duplicated) suggestion for [`PHRASE`].
pub const SUGGESTION_GENT: &str = "Stationstraat 1, 9000 Gent";
/// Second suggestion for [`PHRASE`].
pub const SUGGESTION_SINT_DENIJS: &str = "Stationstraat 1, 9032 Gent";
/// Coordinate pair (as sent in `latlon`) the fixtures answer for.
pub const LATLON: &str = "51.0357,3.7101";
/// Registry identifier resolvable through the detail route.
pub const DETAIL_ID: &str = "20470097";
/// Absolute URI resolvable through the detail route.
pub const DETAIL_URI: &str = "https://data.vlaanderen.be/id/adres/20470097";

/// Register every fixture route on `b`.
///
/// Routes with query parameters are registered before catch-alls so the
/// most specific body wins.
#[must_use]
pub fn install(b: MockUpstreamBuilder) -> MockUpstreamBuilder {
    b.body_when(SUGGESTION_PATH, &[("q", PHRASE)], suggestion::stationstraat())
        .body_when(
            LOCATION_PATH,
            &[("q", SUGGESTION_GENT), ("c", "1")],
            location::single(location::gent()),
        )
        .body_when(
            LOCATION_PATH,
            &[("q", SUGGESTION_SINT_DENIJS), ("c", "1")],
            location::single(location::sint_denijs()),
        )
        .body_when(LOCATION_PATH, &[("q", PHRASE)], location::direct())
        .body_when(LOCATION_PATH, &[("latlon", LATLON)], location::near_station())
        .body_when(
            ADDRESS_MATCH_PATH,
            &[("Postcode", "9000")],
            address_match::list_9000(),
        )
        .body_when(
            ADDRESS_MATCH_PATH,
            &[("Postcode", "9032")],
            address_match::single_9032(),
        )
        .body(&format!("{ADDRESS_MATCH_PATH}/{DETAIL_ID}"), address_match::detail())
        .body("/id/adres/20470097", address_match::detail())
        .body(SUGGESTION_PATH, suggestion::empty())
        .body(LOCATION_PATH, location::empty())
        .body(ADDRESS_MATCH_PATH, address_match::empty())
}
