//! Caller-facing query parameters and their translation into upstream parameters.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::text::strip_diacritics;
use crate::{AdressenError, Location};

/// Address-match parameter for the municipality name.
pub const PARAM_MUNICIPALITY: &str = "GemeenteNaam";
/// Address-match parameter for the postal code.
pub const PARAM_ZIPCODE: &str = "Postcode";
/// Address-match parameter for the street name.
pub const PARAM_THOROUGHFARE: &str = "Straatnaam";
/// Address-match parameter for the house number.
pub const PARAM_HOUSE_NUMBER: &str = "Huisnummer";

/// Sparse structured address query.
///
/// Absent and empty fields are equivalent; a query with no populated field
/// is empty and must not reach the upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchQuery {
    /// Municipality name.
    pub municipality: Option<String>,
    /// Postal code.
    pub zipcode: Option<String>,
    /// Street name.
    pub thoroughfare_name: Option<String>,
    /// House number.
    pub house_number: Option<String>,
}

impl MatchQuery {
    /// An empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the municipality name.
    #[must_use]
    pub fn municipality(mut self, v: impl Into<String>) -> Self {
        self.municipality = Some(v.into());
        self
    }

    /// Set the postal code.
    #[must_use]
    pub fn zipcode(mut self, v: impl Into<String>) -> Self {
        self.zipcode = Some(v.into());
        self
    }

    /// Set the street name.
    #[must_use]
    pub fn thoroughfare_name(mut self, v: impl Into<String>) -> Self {
        self.thoroughfare_name = Some(v.into());
        self
    }

    /// Set the house number.
    #[must_use]
    pub fn house_number(mut self, v: impl Into<String>) -> Self {
        self.house_number = Some(v.into());
        self
    }

    /// Query for the address-match registry built from a location record's
    /// structured fields.
    #[must_use]
    pub fn from_location(loc: &Location) -> Self {
        Self {
            municipality: loc.municipality.clone(),
            zipcode: loc.zipcode.clone(),
            thoroughfare_name: loc.thoroughfare_name.clone(),
            house_number: loc.house_number.clone(),
        }
    }

    /// Returns `true` when no field is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields().all(|(_, v)| v.is_none())
    }

    fn fields(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> {
        [
            (PARAM_MUNICIPALITY, self.municipality.as_deref()),
            (PARAM_ZIPCODE, self.zipcode.as_deref()),
            (PARAM_THOROUGHFARE, self.thoroughfare_name.as_deref()),
            (PARAM_HOUSE_NUMBER, self.house_number.as_deref()),
        ]
        .into_iter()
        .map(|(k, v)| (k, v.filter(|s| !s.is_empty())))
    }

    /// Upstream parameters for the populated fields, in a fixed order, with
    /// diacritics stripped from every value.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        self.fields()
            .filter_map(|(k, v)| v.map(|v| (k, strip_diacritics(v))))
            .collect()
    }

    /// Raw query string form of [`params`](Self::params): each populated
    /// field contributes `Key=value&`. Empty when no field is populated.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.params()
            .into_iter()
            .map(|(k, v)| format!("{k}={v}&"))
            .collect()
    }
}

/// Coordinate lookup parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateQuery {
    /// Latitude (WGS84).
    pub lat: f64,
    /// Longitude (WGS84).
    pub lon: f64,
    /// Result cap; the upstream default applies when absent.
    pub count: Option<u32>,
}

impl CoordinateQuery {
    /// Build a query without a result cap.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            count: None,
        }
    }

    /// Set the result cap.
    #[must_use]
    pub const fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Validate and render the upstream parameters (`latlon`, then `c`).
    ///
    /// # Errors
    /// Returns `InvalidArg` for non-finite coordinates or a zero count.
    pub fn params(&self) -> Result<Vec<(&'static str, String)>, AdressenError> {
        if !self.lat.is_finite() || !self.lon.is_finite() {
            return Err(AdressenError::invalid_arg(
                "lat and lon must be finite numbers",
            ));
        }
        let mut out = vec![("latlon", format!("{},{}", self.lat, self.lon))];
        match self.count {
            Some(0) => return Err(AdressenError::invalid_arg("count must be positive")),
            Some(c) => out.push(("c", c.to_string())),
            None => {}
        }
        Ok(out)
    }
}

/// Reference to a single address record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailRef {
    /// Absolute URI dereferenced as-is.
    Uri(String),
    /// Registry identifier, resolved against the address-match endpoint.
    Id(String),
}

impl DetailRef {
    /// Resolve to the URL to fetch.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the reference is empty, a URI is not
    /// absolute, or an identifier cannot be appended to `base`.
    pub fn resolve(&self, base: &Url) -> Result<Url, AdressenError> {
        match self {
            Self::Uri(uri) => {
                let uri = uri.trim();
                if uri.is_empty() {
                    return Err(AdressenError::invalid_arg("uri must not be empty"));
                }
                Url::parse(uri)
                    .map_err(|e| AdressenError::invalid_arg(format!("invalid uri '{uri}': {e}")))
            }
            Self::Id(id) => {
                let id = id.trim();
                if id.is_empty() {
                    return Err(AdressenError::invalid_arg("id must not be empty"));
                }
                let mut url = base.clone();
                url.path_segments_mut()
                    .map_err(|()| {
                        AdressenError::invalid_arg(format!("endpoint '{base}' cannot take a path"))
                    })?
                    .pop_if_empty()
                    .push(id);
                Ok(url)
            }
        }
    }
}

impl std::fmt::Display for DetailRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uri(s) | Self::Id(s) => f.write_str(s),
        }
    }
}

/// Strip one pair of double quotes enclosing the whole raw query and
/// reject phrases that end up blank.
///
/// Quotes are only stripped when they are the first and last characters;
/// surrounding whitespace keeps them in place.
///
/// # Errors
/// Returns `InvalidArg` when nothing is left to search for.
pub fn search_phrase(raw: &str) -> Result<&str, AdressenError> {
    let phrase = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw);
    if phrase.trim().is_empty() {
        return Err(AdressenError::invalid_arg("query must not be empty"));
    }
    Ok(phrase)
}
