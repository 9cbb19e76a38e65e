use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::LogFormat;

/// Install the global subscriber.
///
/// Filtering follows `RUST_LOG` and falls back to `info` for everything.
///
/// # Errors
/// Fails when a global subscriber is already installed.
pub fn init(format: LogFormat) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = (format == LogFormat::Json).then(|| fmt::layer().json());
    let text = (format == LogFormat::Text).then(fmt::layer);

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(text)
        .try_init()
}
