/// Detail lookup by reference.
pub mod detail;
/// Structured address matching.
pub mod matching;
/// Free-text search pipelines.
pub mod search;
/// Coordinate lookup.
pub mod suggest;

/// Fan-out helpers shared by the routers.
pub mod util;
