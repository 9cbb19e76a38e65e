//! adressen-service
//!
//! HTTP surface over the [`adressen`] orchestrator: `/search`, `/match`,
//! `/detail` and `/suggest-from-latlon`, answering JSON and reporting errors
//! as `{ "msg": "..." }`.
#![warn(missing_docs)]

/// Route table and handlers.
pub mod app;
/// Command-line and environment configuration.
pub mod config;
/// Subscriber installation.
pub mod logging;

pub use app::router;
pub use config::Args;
