//! Projection of raw upstream bodies into address envelopes.
//!
//! Every function here is total: bodies that cannot be read come back as
//! [`Normalized::Empty`] with the reason attached instead of an error, so a
//! single misbehaving upstream degrades a merge rather than failing it.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{AddressEnvelope, AddressMatch, AdressenError, Location, Resolution};

/// Root key of the location endpoint's record array.
pub const LOCATION_ROOT: &str = "LocationResult";
/// Root key of the suggestion endpoint's token array.
pub const SUGGESTION_ROOT: &str = "SuggestionResult";
/// Root key of the address-match endpoint's wrapped record array.
pub const ADDRESS_MATCH_ROOT: &str = "adressen";

/// Upstream schema that produced a body.
///
/// Chosen explicitly by the caller; bodies are never sniffed for their shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceShape {
    /// Fuzzy/coordinate location result (`LocationResult` array).
    Location,
    /// Address-match result (`adressen` array or a single record).
    AddressMatch,
}

/// Why a body produced no records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyReason {
    /// The body is not JSON.
    Unparseable(String),
    /// The body is `null` or lacks the expected root.
    MissingRoot,
    /// The root is present but holds no records.
    NoRecords,
    /// The root is present but its records do not fit the schema.
    Malformed(String),
}

impl EmptyReason {
    /// Returns `true` when the upstream misbehaved, as opposed to legitimately
    /// having nothing to return.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Unparseable(_) | Self::Malformed(_))
    }

    /// Describe a failure as a `Malformed` error tagged with `upstream`.
    /// Returns `None` for legitimate empties.
    #[must_use]
    pub fn to_error(&self, upstream: &str) -> Option<AdressenError> {
        match self {
            Self::Unparseable(msg) | Self::Malformed(msg) => {
                Some(AdressenError::malformed(upstream, msg.clone()))
            }
            Self::MissingRoot | Self::NoRecords => None,
        }
    }
}

/// Outcome of normalizing one upstream body.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized<T> {
    /// The body held an array of records.
    List(Vec<T>),
    /// The body was a single, unwrapped record.
    Single(T),
    /// Nothing usable; see the reason.
    Empty(EmptyReason),
}

impl<T> Normalized<T> {
    /// Flatten into a list, losing the singleton distinction.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::List(v) => v,
            Self::Single(t) => vec![t],
            Self::Empty(_) => Vec::new(),
        }
    }

    /// Reason for an empty outcome, if any.
    #[must_use]
    pub const fn empty_reason(&self) -> Option<&EmptyReason> {
        match self {
            Self::Empty(r) => Some(r),
            _ => None,
        }
    }

    /// Convert every record.
    #[must_use]
    pub fn map<U>(self, f: impl Fn(T) -> U) -> Normalized<U> {
        match self {
            Self::List(v) => Normalized::List(v.into_iter().map(f).collect()),
            Self::Single(t) => Normalized::Single(f(t)),
            Self::Empty(r) => Normalized::Empty(r),
        }
    }
}

impl<T: Into<AddressEnvelope>> Normalized<T> {
    /// Caller-facing resolution: lists stay lists, singletons stay
    /// singletons, empties become an empty list.
    #[must_use]
    pub fn into_resolution(self) -> Resolution {
        match self {
            Self::List(v) => Resolution::Many(v.into_iter().map(Into::into).collect()),
            Self::Single(t) => Resolution::One(Box::new(t.into())),
            Self::Empty(_) => Resolution::empty(),
        }
    }
}

/// Country augmentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localization<'a> {
    /// Country written onto every record.
    pub country: &'a str,
    /// Only display names in this language receive the country suffix.
    pub primary_language: &'a str,
}

/// Append `", <country>"` to a display string unless it already ends with it.
#[must_use]
pub fn append_country(display: &str, country: &str) -> String {
    if display.is_empty() {
        return country.to_string();
    }
    let already = display
        .strip_suffix(country)
        .is_some_and(|head| head.ends_with(", "));
    if already {
        display.to_string()
    } else {
        format!("{display}, {country}")
    }
}

/// Set the country on a location and suffix its display string.
pub fn augment_location(loc: &mut Location, l10n: Localization<'_>) {
    loc.country = Some(l10n.country.to_string());
    loc.formatted_address = append_country(&loc.formatted_address, l10n.country);
}

/// Set the country on an address match; suffix its display name only when
/// it is in the primary language.
pub fn augment_match(m: &mut AddressMatch, l10n: Localization<'_>) {
    m.country = Some(l10n.country.to_string());
    let name = &mut m.full_address.geographic_name;
    if name.language == l10n.primary_language {
        name.spelling = append_country(&name.spelling, l10n.country);
    }
}

/// Normalize a body of the given shape into address envelopes.
#[must_use]
pub fn normalize(body: &[u8], shape: SourceShape, l10n: Localization<'_>) -> Normalized<AddressEnvelope> {
    match shape {
        SourceShape::Location => normalize_locations(body, l10n).map(AddressEnvelope::Location),
        SourceShape::AddressMatch => normalize_matches(body, l10n).map(AddressEnvelope::Match),
    }
}

/// Normalize a location-endpoint body. Never yields [`Normalized::Single`].
#[must_use]
pub fn normalize_locations(body: &[u8], l10n: Localization<'_>) -> Normalized<Location> {
    let root = match parse_root(body) {
        Ok(v) => v,
        Err(reason) => return Normalized::Empty(reason),
    };
    let Some(records) = root.get(LOCATION_ROOT).filter(|v| !v.is_null()) else {
        return Normalized::Empty(EmptyReason::MissingRoot);
    };
    let Some(records) = records.as_array() else {
        return Normalized::Empty(EmptyReason::Malformed(format!(
            "{LOCATION_ROOT} is not an array"
        )));
    };
    match project_all::<Location>(records) {
        Ok(mut locs) => {
            for loc in &mut locs {
                augment_location(loc, l10n);
            }
            Normalized::List(locs)
        }
        Err(reason) => Normalized::Empty(reason),
    }
}

/// Normalize an address-match body: a wrapped `adressen` array becomes a
/// list, an unwrapped record becomes a singleton.
#[must_use]
pub fn normalize_matches(body: &[u8], l10n: Localization<'_>) -> Normalized<AddressMatch> {
    let root = match parse_root(body) {
        Ok(v) => v,
        Err(reason) => return Normalized::Empty(reason),
    };
    let Some(fields) = root.as_object() else {
        return Normalized::Empty(EmptyReason::Malformed("root is not an object".into()));
    };
    // An empty object or a null `adressen` holds nothing to project.
    if fields.is_empty() || fields.get(ADDRESS_MATCH_ROOT).is_some_and(Value::is_null) {
        return Normalized::Empty(EmptyReason::MissingRoot);
    }
    if let Some(records) = root.get(ADDRESS_MATCH_ROOT).and_then(Value::as_array) {
        return match project_all::<AddressMatch>(records) {
            Ok(mut matches) => {
                for m in &mut matches {
                    augment_match(m, l10n);
                }
                Normalized::List(matches)
            }
            Err(reason) => Normalized::Empty(reason),
        };
    }
    match serde_json::from_value::<AddressMatch>(root) {
        Ok(mut m) => {
            augment_match(&mut m, l10n);
            Normalized::Single(m)
        }
        Err(e) => Normalized::Empty(EmptyReason::Malformed(e.to_string())),
    }
}

/// Read the suggestion tokens of a suggestion-endpoint body.
///
/// # Errors
/// Returns the reason when the body holds no usable tokens.
pub fn parse_suggestions(body: &[u8]) -> Result<Vec<String>, EmptyReason> {
    let root = parse_root(body)?;
    let Some(tokens) = root.get(SUGGESTION_ROOT).filter(|v| !v.is_null()) else {
        return Err(EmptyReason::MissingRoot);
    };
    let tokens: Vec<String> = serde_json::from_value(tokens.clone())
        .map_err(|e| EmptyReason::Malformed(e.to_string()))?;
    if tokens.is_empty() {
        return Err(EmptyReason::NoRecords);
    }
    Ok(tokens)
}

fn parse_root(body: &[u8]) -> Result<Value, EmptyReason> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(EmptyReason::MissingRoot);
    }
    let root: Value =
        serde_json::from_slice(body).map_err(|e| EmptyReason::Unparseable(e.to_string()))?;
    if root.is_null() {
        return Err(EmptyReason::MissingRoot);
    }
    Ok(root)
}

/// Project every element; elements that do not fit are skipped. Fails only
/// when the array is non-empty and nothing fit.
fn project_all<T: DeserializeOwned>(records: &[Value]) -> Result<Vec<T>, EmptyReason> {
    if records.is_empty() {
        return Err(EmptyReason::NoRecords);
    }
    let mut out = Vec::with_capacity(records.len());
    let mut last_err = None;
    for record in records {
        match serde_json::from_value::<T>(record.clone()) {
            Ok(t) => out.push(t),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %e, "skipping record that does not fit the upstream schema");
                last_err = Some(e.to_string());
            }
        }
    }
    match (out.is_empty(), last_err) {
        (true, Some(msg)) => Err(EmptyReason::Malformed(msg)),
        _ => Ok(out),
    }
}
