//! Address records as exchanged with the upstream registries and returned to callers.
//!
//! Upstream fields this crate does not model are kept in `extra` so a
//! normalized record serializes back with everything the registry sent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A location record from the fuzzy/coordinate location endpoint.
///
/// Identity is the (`id`, `location_type`) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Upstream-assigned identifier; a number or a string depending on the record.
    #[serde(rename = "ID")]
    pub id: Value,
    /// Granularity of the record (street, house number, municipality, ...).
    #[serde(rename = "LocationType", default)]
    pub location_type: String,
    /// Display string.
    #[serde(rename = "FormattedAddress", default)]
    pub formatted_address: String,
    /// Municipality name.
    #[serde(rename = "Municipality", default)]
    pub municipality: Option<String>,
    /// Postal code.
    #[serde(rename = "Zipcode", default)]
    pub zipcode: Option<String>,
    /// Street name.
    #[serde(rename = "Thoroughfarename", default)]
    pub thoroughfare_name: Option<String>,
    /// House number.
    #[serde(rename = "Housenumber", default)]
    pub house_number: Option<String>,
    /// Country; never supplied upstream, set during normalization.
    #[serde(rename = "Country", default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Remaining upstream fields (coordinates, bounding box, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Identifier block of an address-match record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identificator {
    /// Opaque identifier; the identity key of the record.
    pub id: String,
    /// Namespace, object id, version and whatever else the registry sends.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Display name in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeographicName {
    /// Display text.
    pub spelling: String,
    /// Language tag of `spelling`.
    #[serde(rename = "taal")]
    pub language: String,
}

/// Full address block of an address-match record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullAddress {
    /// Display name of the full address.
    #[serde(rename = "geografischeNaam")]
    pub geographic_name: GeographicName,
    /// Remaining upstream fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A record from the structured address-match registry.
///
/// Identity is `identificator.id` alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressMatch {
    /// Identifier block.
    pub identificator: Identificator,
    /// Full address with its display name.
    #[serde(rename = "volledigAdres")]
    pub full_address: FullAddress,
    /// Country; never supplied upstream, set during normalization.
    #[serde(rename = "land", default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Remaining upstream fields (house number, status, links, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Key that names one real-world record, used to deduplicate merged results.
#[derive(Debug, Clone, PartialEq)]
pub enum IdentityKey {
    /// Location identity: both fields must match exactly.
    Location {
        /// Upstream identifier.
        id: Value,
        /// Record granularity.
        location_type: String,
    },
    /// Address-match identity.
    AddressMatch(String),
}

impl Location {
    /// Identity key of this location.
    #[must_use]
    pub fn identity_key(&self) -> IdentityKey {
        IdentityKey::Location {
            id: self.id.clone(),
            location_type: self.location_type.clone(),
        }
    }
}

impl AddressMatch {
    /// Identity key of this address match.
    #[must_use]
    pub fn identity_key(&self) -> IdentityKey {
        IdentityKey::AddressMatch(self.identificator.id.clone())
    }
}

/// Canonical address representation returned to callers.
///
/// Serializes transparently as the upstream record it was projected from,
/// with the country field populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AddressEnvelope {
    /// Projected from the address-match registry.
    Match(AddressMatch),
    /// Projected from the location endpoint.
    Location(Location),
}

impl AddressEnvelope {
    /// Country field of the envelope.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        match self {
            Self::Match(m) => m.country.as_deref(),
            Self::Location(l) => l.country.as_deref(),
        }
    }

    /// Display string shown to users.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Match(m) => &m.full_address.geographic_name.spelling,
            Self::Location(l) => &l.formatted_address,
        }
    }

    /// Identity key of the underlying record.
    #[must_use]
    pub fn identity_key(&self) -> IdentityKey {
        match self {
            Self::Match(m) => m.identity_key(),
            Self::Location(l) => l.identity_key(),
        }
    }

    /// Returns the location record, if this envelope was projected from one.
    #[must_use]
    pub const fn as_location(&self) -> Option<&Location> {
        match self {
            Self::Location(l) => Some(l),
            Self::Match(_) => None,
        }
    }

    /// Returns the address-match record, if this envelope was projected from one.
    #[must_use]
    pub const fn as_match(&self) -> Option<&AddressMatch> {
        match self {
            Self::Match(m) => Some(m),
            Self::Location(_) => None,
        }
    }
}

impl From<Location> for AddressEnvelope {
    fn from(l: Location) -> Self {
        Self::Location(l)
    }
}

impl From<AddressMatch> for AddressEnvelope {
    fn from(m: AddressMatch) -> Self {
        Self::Match(m)
    }
}
