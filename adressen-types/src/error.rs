use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the adressen workspace.
///
/// This wraps argument validation errors, upstream-tagged transport failures,
/// not-found conditions, timeouts, and an aggregate for fanned-out stages in
/// which every source failed.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AdressenError {
    /// Invalid or missing input argument. Detected before any upstream call.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A detail reference did not resolve to any record.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "details for https://...".
        what: String,
    },

    /// The upstream was unreachable or answered with a non-success status.
    #[error("{upstream} transport failure{}: {msg}", status_suffix(.status))]
    Transport {
        /// Upstream client name that failed.
        upstream: String,
        /// HTTP status code, when the upstream answered at all.
        status: Option<u16>,
        /// Human-readable cause.
        msg: String,
    },

    /// The upstream body could not be read as the expected shape.
    #[error("{upstream} returned a malformed response: {msg}")]
    Malformed {
        /// Upstream endpoint label that produced the body.
        upstream: String,
        /// Parser or projection message.
        msg: String,
    },

    /// An individual upstream call exceeded the configured timeout.
    #[error("upstream timed out: {capability} via {upstream}")]
    UpstreamTimeout {
        /// Upstream client name that timed out.
        upstream: String,
        /// Capability label (e.g. "location", "match").
        capability: String,
    },

    /// A fanned-out stage exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label for which the request timed out.
        capability: String,
    },

    /// Every source in a fanned-out stage failed; contains the individual failures.
    #[error("all upstream calls failed: {0:?}")]
    AllUpstreamsFailed(Vec<AdressenError>),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (status {s})")).unwrap_or_default()
}

impl AdressenError {
    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `Transport` error.
    pub fn transport(upstream: impl Into<String>, status: Option<u16>, msg: impl Into<String>) -> Self {
        Self::Transport {
            upstream: upstream.into(),
            status,
            msg: msg.into(),
        }
    }

    /// Helper: build a `Malformed` error.
    pub fn malformed(upstream: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Malformed {
            upstream: upstream.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `UpstreamTimeout` error.
    pub fn upstream_timeout(upstream: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::UpstreamTimeout {
            upstream: upstream.into(),
            capability: capability.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// HTTP status code of the upstream answer, if this is a transport failure with one.
    #[must_use]
    pub const fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }

    /// Status code a caller-facing HTTP surface should answer with.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidArg(_) => 400,
            Self::NotFound { .. } => 404,
            Self::Transport { .. } | Self::AllUpstreamsFailed(_) => 502,
            Self::UpstreamTimeout { .. } | Self::RequestTimeout { .. } => 504,
            Self::Malformed { .. } | Self::Other(_) => 500,
        }
    }

    /// Returns `true` for validation failures raised before any upstream call.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidArg(_))
    }
}
