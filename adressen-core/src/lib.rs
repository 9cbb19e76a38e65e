//! adressen-core
//!
//! Core contracts and pure pipeline stages shared across the adressen ecosystem.
//!
//! - `upstream`: the `UpstreamClient` trait and the per-call `UpstreamRequest`.
//! - `text`: diacritic stripping for parameters sent to accent-sensitive upstreams.
//! - `query`: caller-facing query parameters and their upstream rendering.
//! - `normalize`: projection of raw upstream bodies into address envelopes.
//! - `dedup`: identity-based merging of result sequences.
//!
//! Nothing in this crate blocks or spawns; the only suspension point in the
//! whole pipeline is `UpstreamClient::fetch`.
#![warn(missing_docs)]

/// Identity-based merging of result sequences.
pub mod dedup;
/// Projection of raw upstream bodies into address envelopes.
pub mod normalize;
/// Query parameters for each orchestrator operation.
pub mod query;
/// Diacritic stripping.
pub mod text;
/// Upstream client contract.
pub mod upstream;

pub use adressen_types::*;
pub use dedup::{Identity, merge_unique, merge_unique_by};
pub use normalize::{
    EmptyReason, Localization, Normalized, SourceShape, normalize, normalize_locations,
    normalize_matches, parse_suggestions,
};
pub use query::{CoordinateQuery, DetailRef, MatchQuery, search_phrase};
pub use text::strip_diacritics;
pub use upstream::{UpstreamClient, UpstreamRequest};
