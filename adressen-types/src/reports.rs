//! Report envelopes produced by the orchestrator.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::address::AddressEnvelope;
use crate::error::AdressenError;

/// Outcome of a free-text search.
///
/// Serializes as `{ "adressen": [...], "totaalAantal": n }`. The count is
/// always derived from the list and is never stored separately.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchReport {
    /// Resolved, deduplicated addresses in first-seen order.
    pub addresses: Vec<AddressEnvelope>,
    /// Non-fatal issues encountered while building the report (absorbed
    /// upstream failures, malformed bodies).
    pub warnings: Vec<AdressenError>,
}

impl SearchReport {
    /// Build a report without warnings.
    #[must_use]
    pub const fn new(addresses: Vec<AddressEnvelope>) -> Self {
        Self {
            addresses,
            warnings: Vec::new(),
        }
    }

    /// Number of addresses in the report (`totaalAantal`).
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.addresses.len()
    }
}

impl Serialize for SearchReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("SearchReport", 2)?;
        s.serialize_field("adressen", &self.addresses)?;
        s.serialize_field("totaalAantal", &self.total_count())?;
        s.end()
    }
}

impl<'de> Deserialize<'de> for SearchReport {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Wire {
            #[serde(default)]
            adressen: Vec<AddressEnvelope>,
        }
        let wire = Wire::deserialize(deserializer)?;
        Ok(Self::new(wire.adressen))
    }
}

/// Result of an address-match or detail call.
///
/// The upstream answers with either a wrapped list or a single record
/// depending on match cardinality; the two are kept apart so list and
/// singleton endpoints can each answer with the shape they promise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Resolution {
    /// Upstream answered with a list of records (possibly empty).
    Many(Vec<AddressEnvelope>),
    /// Upstream answered with a single, unwrapped record.
    One(Box<AddressEnvelope>),
}

impl Resolution {
    /// An empty list.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Many(Vec::new())
    }

    /// Number of records carried.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Many(v) => v.len(),
            Self::One(_) => 1,
        }
    }

    /// Returns `true` when no record is carried.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into a list, losing the singleton distinction.
    #[must_use]
    pub fn into_vec(self) -> Vec<AddressEnvelope> {
        match self {
            Self::Many(v) => v,
            Self::One(e) => vec![*e],
        }
    }
}
