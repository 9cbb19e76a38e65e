//! adressen-http
//!
//! Production `UpstreamClient` backed by a shared `reqwest::Client`. One
//! `fetch` is one GET: no retries, no body interpretation, non-success
//! statuses surface as `AdressenError::Transport` with the status attached.
#![warn(missing_docs)]

/// Builder for configuring the underlying HTTP client.
pub mod builder;

use async_trait::async_trait;

use adressen_core::{AdressenError, UpstreamClient, UpstreamRequest};

pub use builder::HttpUpstreamBuilder;

/// Public upstream client type. Construct with [`HttpUpstream::builder`] or
/// wrap an existing client with [`HttpUpstream::with_client`].
///
/// `reqwest::Client` is `Clone + Send + Sync` and pools connections
/// internally, so one instance serves every concurrent call.
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: reqwest::Client,
}

impl HttpUpstream {
    /// Stable upstream name used in errors and logs.
    pub const NAME: &'static str = "adressen-http";

    /// Start configuring a client.
    #[must_use]
    pub fn builder() -> HttpUpstreamBuilder {
        HttpUpstreamBuilder::new()
    }

    /// Wrap an existing `reqwest::Client`.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn map_reqwest_err(e: &reqwest::Error, req: &UpstreamRequest) -> AdressenError {
    let status = e.status().map(|s| s.as_u16());
    let what = if e.is_timeout() {
        "timed out"
    } else if e.is_connect() {
        "connection failed"
    } else if e.is_decode() || e.is_body() {
        "failed reading body"
    } else {
        "request failed"
    };
    AdressenError::transport(
        HttpUpstream::NAME,
        status,
        format!("{what}: {} ({e})", req.endpoint()),
    )
}

#[async_trait]
impl UpstreamClient for HttpUpstream {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "adressen_http::fetch",
            skip(self, req),
            fields(endpoint = %req.endpoint()),
        )
    )]
    async fn fetch(&self, req: &UpstreamRequest) -> Result<Vec<u8>, AdressenError> {
        let mut rb = self.client.get(req.url());
        for (name, value) in req.headers() {
            rb = rb.header(name.as_str(), value.as_str());
        }

        let resp = rb.send().await.map_err(|e| map_reqwest_err(&e, req))?;
        let status = resp.status();
        if !status.is_success() {
            #[cfg(feature = "tracing")]
            tracing::debug!(status = status.as_u16(), "upstream answered with non-success status");
            return Err(AdressenError::transport(
                Self::NAME,
                Some(status.as_u16()),
                format!("HTTP error {status} from {}", req.endpoint()),
            ));
        }

        let body = resp.bytes().await.map_err(|e| map_reqwest_err(&e, req))?;
        Ok(body.to_vec())
    }
}
