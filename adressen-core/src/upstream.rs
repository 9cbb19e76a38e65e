use async_trait::async_trait;
use url::Url;

use crate::AdressenError;

/// A single GET request against one upstream endpoint.
///
/// Built per call by the orchestrator; nothing here is shared between
/// concurrent calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    endpoint: Url,
    params: Vec<(String, String)>,
    headers: Vec<(String, String)>,
}

impl UpstreamRequest {
    /// Start a request for an absolute endpoint URL.
    #[must_use]
    pub const fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            params: Vec::new(),
            headers: Vec::new(),
        }
    }

    /// Append a query parameter. Order is preserved on the wire.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Append several query parameters.
    #[must_use]
    pub fn params<K, V, I>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Attach a request header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Endpoint without the query parameters of this request.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Query parameters in insertion order.
    #[must_use]
    pub fn query_params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Request headers in insertion order.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// First value of a query parameter, if present.
    #[must_use]
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Final URL with every parameter percent-encoded and appended to the
    /// endpoint's own query.
    #[must_use]
    pub fn url(&self) -> Url {
        let mut url = self.endpoint.clone();
        if !self.params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in &self.params {
                pairs.append_pair(k, v);
            }
        }
        url
    }
}

/// Transport to the upstream registries.
///
/// Implementations perform exactly one request per `fetch`, never retry and
/// never interpret the body. A non-success status is a `Transport` error
/// carrying the status code; absence of data is for the caller to decide.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// A stable identifier used in errors and logs (e.g., "adressen-http").
    fn name(&self) -> &'static str;

    /// Issue the request and return the raw response body.
    async fn fetch(&self, req: &UpstreamRequest) -> Result<Vec<u8>, AdressenError>;
}
