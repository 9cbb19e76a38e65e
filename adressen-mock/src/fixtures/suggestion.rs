//! Suggestion endpoint bodies.

use serde_json::json;

use super::{SUGGESTION_GENT, SUGGESTION_SINT_DENIJS};

/// Suggestions for the fixture phrase; the first token repeats.
#[must_use]
pub fn stationstraat() -> String {
    json!({
        "SuggestionResult": [SUGGESTION_GENT, SUGGESTION_SINT_DENIJS, SUGGESTION_GENT]
    })
    .to_string()
}

/// No suggestions.
#[must_use]
pub fn empty() -> String {
    json!({ "SuggestionResult": [] }).to_string()
}
