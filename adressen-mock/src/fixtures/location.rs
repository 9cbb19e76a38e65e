//! Location endpoint bodies and records.

use serde_json::{Value, json};

/// House number 1 on Stationstraat, 9000 Gent.
#[must_use]
pub fn gent() -> Value {
    json!({
        "ID": 1001,
        "LocationType": "Housenumber",
        "FormattedAddress": "Stationstraat 1, 9000 Gent",
        "Municipality": "Gent",
        "Zipcode": "9000",
        "Thoroughfarename": "Stationstraat",
        "Housenumber": "1",
        "Location": { "Lat_WGS84": 51.0357, "Lon_WGS84": 3.7101 }
    })
}

/// House number 1 on Stationstraat, 9032 Gent (Wondelgem).
#[must_use]
pub fn sint_denijs() -> Value {
    json!({
        "ID": 1002,
        "LocationType": "Housenumber",
        "FormattedAddress": "Stationstraat 1, 9032 Gent",
        "Municipality": "Gent",
        "Zipcode": "9032",
        "Thoroughfarename": "Stationstraat",
        "Housenumber": "1",
        "Location": { "Lat_WGS84": 51.0871, "Lon_WGS84": 3.7203 }
    })
}

/// The street itself; shares its `ID` with [`gent`] but not its type.
#[must_use]
pub fn street() -> Value {
    json!({
        "ID": 1001,
        "LocationType": "Thoroughfarename",
        "FormattedAddress": "Stationstraat, 9000 Gent",
        "Municipality": "Gent",
        "Zipcode": "9000",
        "Thoroughfarename": "Stationstraat"
    })
}

/// Wrap one record as a location body.
#[must_use]
pub fn single(record: Value) -> String {
    json!({ "LocationResult": [record] }).to_string()
}

/// Direct search result for the fixture phrase; [`gent`] appears twice.
#[must_use]
pub fn direct() -> String {
    json!({ "LocationResult": [gent(), sint_denijs(), gent()] }).to_string()
}

/// Coordinate lookup result around the fixture coordinates.
#[must_use]
pub fn near_station() -> String {
    json!({ "LocationResult": [gent(), street()] }).to_string()
}

/// No locations.
#[must_use]
pub fn empty() -> String {
    json!({ "LocationResult": [] }).to_string()
}
