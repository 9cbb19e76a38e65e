use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for routing, errors, and telemetry.
///
/// The first four map one-to-one with orchestrator operations; the remaining
/// ones label the individual upstream stages a free-text search may fan out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Free-text address search.
    Search,
    /// Structured address match.
    Match,
    /// Detail lookup by reference.
    Detail,
    /// Addresses around a coordinate pair.
    Coordinate,

    /// Fuzzy suggestion tokens for a phrase.
    Suggestion,
    /// Location records for a phrase or suggestion.
    Location,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Match => "match",
            Self::Detail => "detail",
            Self::Coordinate => "coordinate",
            Self::Suggestion => "suggestion",
            Self::Location => "location",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
