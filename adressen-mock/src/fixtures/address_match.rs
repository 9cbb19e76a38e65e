//! Address-match endpoint bodies and records.

use serde_json::{Value, json};

fn record(object_id: &str, spelling: &str, language: &str, postcode: &str) -> Value {
    json!({
        "identificator": {
            "id": format!("https://data.vlaanderen.be/id/adres/{object_id}"),
            "naamruimte": "https://data.vlaanderen.be/id/adres",
            "objectId": object_id,
            "versieId": "2023-03-01T10:12:44+01:00"
        },
        "detail": format!("https://basisregisters.vlaanderen.be/api/v2/adressen/{object_id}"),
        "huisnummer": "1",
        "postinfo": { "objectId": postcode },
        "volledigAdres": {
            "geografischeNaam": { "spelling": spelling, "taal": language }
        },
        "adresStatus": "inGebruik"
    })
}

/// Stationstraat 1, 9000 Gent.
#[must_use]
pub fn gent() -> Value {
    record("20470097", "Stationstraat 1, 9000 Gent", "nl", "9000")
}

/// Box 1 of the same building, named in French.
#[must_use]
pub fn gent_box() -> Value {
    record("20470098", "Rue de la Gare 1 boîte 1, 9000 Gand", "fr", "9000")
}

/// Stationstraat 1, 9032 Gent.
#[must_use]
pub fn sint_denijs() -> Value {
    record("30000001", "Stationstraat 1, 9032 Gent", "nl", "9032")
}

/// Wrapped list for postcode 9000.
#[must_use]
pub fn list_9000() -> String {
    json!({ "adressen": [gent(), gent_box()], "totaalAantal": 2 }).to_string()
}

/// Unwrapped single record for postcode 9032.
#[must_use]
pub fn single_9032() -> String {
    sint_denijs().to_string()
}

/// Detail body of [`super::DETAIL_ID`].
#[must_use]
pub fn detail() -> String {
    gent().to_string()
}

/// No matches.
#[must_use]
pub fn empty() -> String {
    json!({ "adressen": [], "totaalAantal": 0 }).to_string()
}
