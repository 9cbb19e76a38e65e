use std::time::Duration;

use adressen_core::AdressenError;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

use crate::HttpUpstream;

const DEFAULT_USER_AGENT: &str = concat!("adressen/", env!("CARGO_PKG_VERSION"));

/// Builder for [`HttpUpstream`].
///
/// Defaults: `Accept: application/json`, a crate user agent, a 10 second
/// connect timeout and no overall timeout (the orchestrator bounds each call).
#[derive(Debug, Clone)]
pub struct HttpUpstreamBuilder {
    user_agent: String,
    connect_timeout: Duration,
    timeout: Option<Duration>,
}

impl Default for HttpUpstreamBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpUpstreamBuilder {
    /// Builder with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout: Duration::from_secs(10),
            timeout: None,
        }
    }

    /// Override the user agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    /// Override the connect timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set an overall timeout on every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the user agent is not a valid header value or
    /// the TLS backend cannot be initialised.
    pub fn build(self) -> Result<HttpUpstream, AdressenError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut b = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .default_headers(headers)
            .connect_timeout(self.connect_timeout);
        if let Some(t) = self.timeout {
            b = b.timeout(t);
        }
        let client = b.build().map_err(|e| {
            AdressenError::invalid_arg(format!("failed to build http client: {e}"))
        })?;
        Ok(HttpUpstream::with_client(client))
    }
}
