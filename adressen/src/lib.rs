//! Adressen resolves free-text, structured, reference and coordinate address
//! queries against the Flemish geolocation and address registries.
//!
//! Overview
//! - Talks to upstreams only through an [`UpstreamClient`]; the production
//!   client lives in `adressen-http`, a scriptable one in `adressen-mock`.
//! - Normalizes every upstream body into [`AddressEnvelope`]s carrying the
//!   configured country, and deduplicates merged results by record identity.
//! - Holds no state between calls: every operation is one complete pipeline run.
//!
//! Key behaviors and trade-offs
//! - Search strategy:
//!   - `Direct`: one location call restricted to house numbers; cheapest.
//!   - `SuggestThenLocate`: fuzzy suggestions fanned out to location calls;
//!     tolerant of typos at the cost of one call per suggestion.
//!   - `SuggestLocateMatch`: additionally fans every unique location out to the
//!     address registry; richest records, most upstream load.
//! - Fan-out stages issue all calls concurrently and wait for every one to
//!   settle before merging, so output order follows request order, not
//!   completion order.
//! - A failing or misbehaving source inside a fan-out stage is absorbed into
//!   the report's warnings; the stage fails only when every source failed.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use adressen::{Adressen, SearchStrategy};
//! use adressen_http::HttpUpstream;
//!
//! let adressen = Adressen::builder()
//!     .with_upstream(Arc::new(HttpUpstream::builder().build()?))
//!     .search_strategy(SearchStrategy::SuggestLocateMatch)
//!     .build()?;
//!
//! let report = adressen.search("\"Stationstraat 1 Gent\"").await?;
//! println!("{} addresses", report.total_count());
//! ```
#![warn(missing_docs)]

mod core;
/// Per-operation routing.
pub mod router;

pub use crate::core::{Adressen, AdressenBuilder};
pub use adressen_core::{
    AddressEnvelope, AddressMatch, AdressenConfig, AdressenError, Capability, CoordinateQuery,
    DetailRef, Endpoints, Location, MatchQuery, Resolution, SearchReport, SearchStrategy,
    UpstreamClient, UpstreamRequest,
};
