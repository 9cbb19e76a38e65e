//! Mock upstream client for CI-safe tests and demos.
//!
//! Routes are matched on the endpoint path suffix plus optional exact query
//! parameters; the first matching route answers. Every call is recorded so
//! tests can assert which upstream requests were (or were not) issued.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use adressen_core::{AdressenError, UpstreamClient, UpstreamRequest};

pub mod fixtures;

/// Path suffix of the fuzzy suggestion endpoint.
pub const SUGGESTION_PATH: &str = "/Suggestion";
/// Path suffix of the location endpoint.
pub const LOCATION_PATH: &str = "/Location";
/// Path suffix of the address-match endpoint.
pub const ADDRESS_MATCH_PATH: &str = "/adressen";

type Responder = Arc<dyn Fn(&UpstreamRequest) -> Result<String, AdressenError> + Send + Sync>;

struct Route {
    path_suffix: String,
    params: Vec<(String, String)>,
    delay: Option<Duration>,
    responder: Responder,
}

impl Route {
    fn matches(&self, req: &UpstreamRequest) -> bool {
        req.endpoint().path().ends_with(&self.path_suffix)
            && self
                .params
                .iter()
                .all(|(k, v)| req.query_param(k) == Some(v.as_str()))
    }
}

/// Scriptable in-memory upstream.
pub struct MockUpstream {
    routes: Vec<Route>,
    calls: Mutex<Vec<UpstreamRequest>>,
}

impl MockUpstream {
    /// Start scripting a mock.
    #[must_use]
    pub fn builder() -> MockUpstreamBuilder {
        MockUpstreamBuilder { routes: Vec::new() }
    }

    /// Mock preloaded with the fixture registry (see [`fixtures`]).
    #[must_use]
    pub fn with_fixtures() -> Self {
        fixtures::install(Self::builder()).build()
    }

    /// Every request received so far, in arrival order.
    #[must_use]
    pub fn calls(&self) -> Vec<UpstreamRequest> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of requests received so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Requests received for endpoints ending in `path_suffix`.
    #[must_use]
    pub fn calls_to(&self, path_suffix: &str) -> Vec<UpstreamRequest> {
        self.calls()
            .into_iter()
            .filter(|r| r.endpoint().path().ends_with(path_suffix))
            .collect()
    }
}

#[async_trait]
impl UpstreamClient for MockUpstream {
    fn name(&self) -> &'static str {
        "adressen-mock"
    }

    async fn fetch(&self, req: &UpstreamRequest) -> Result<Vec<u8>, AdressenError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(req.clone());

        let Some(route) = self.routes.iter().find(|r| r.matches(req)) else {
            return Err(AdressenError::transport(
                self.name(),
                Some(404),
                format!("no mock route for {}", req.url()),
            ));
        };
        if let Some(d) = route.delay {
            tokio::time::sleep(d).await;
        }
        (route.responder)(req).map(String::into_bytes)
    }
}

/// Builder for [`MockUpstream`].
pub struct MockUpstreamBuilder {
    routes: Vec<Route>,
}

impl MockUpstreamBuilder {
    fn push(
        mut self,
        path_suffix: &str,
        params: &[(&str, &str)],
        delay: Option<Duration>,
        responder: Responder,
    ) -> Self {
        self.routes.push(Route {
            path_suffix: path_suffix.to_string(),
            params: params
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            delay,
            responder,
        });
        self
    }

    /// Answer every request to `path_suffix` with `body`.
    #[must_use]
    pub fn body(self, path_suffix: &str, body: impl Into<String>) -> Self {
        self.body_when(path_suffix, &[], body)
    }

    /// Answer requests to `path_suffix` carrying all of `params` with `body`.
    #[must_use]
    pub fn body_when(self, path_suffix: &str, params: &[(&str, &str)], body: impl Into<String>) -> Self {
        let body = body.into();
        self.push(path_suffix, params, None, Arc::new(move |_| Ok(body.clone())))
    }

    /// Like [`body_when`](Self::body_when) but answer only after `delay`.
    #[must_use]
    pub fn delayed_body_when(
        self,
        path_suffix: &str,
        params: &[(&str, &str)],
        delay: Duration,
        body: impl Into<String>,
    ) -> Self {
        let body = body.into();
        self.push(path_suffix, params, Some(delay), Arc::new(move |_| Ok(body.clone())))
    }

    /// Fail requests to `path_suffix` carrying all of `params` with a
    /// transport error (`status` of `None` simulates an unreachable host).
    #[must_use]
    pub fn fail_when(self, path_suffix: &str, params: &[(&str, &str)], status: Option<u16>) -> Self {
        self.push(
            path_suffix,
            params,
            None,
            Arc::new(move |req| {
                Err(AdressenError::transport(
                    "adressen-mock",
                    status,
                    format!("forced failure for {}", req.url()),
                ))
            }),
        )
    }

    /// Answer requests to `path_suffix` with a closure.
    #[must_use]
    pub fn route<F>(self, path_suffix: &str, f: F) -> Self
    where
        F: Fn(&UpstreamRequest) -> Result<String, AdressenError> + Send + Sync + 'static,
    {
        self.push(path_suffix, &[], None, Arc::new(f))
    }

    /// Finish the mock.
    #[must_use]
    pub fn build(self) -> MockUpstream {
        MockUpstream {
            routes: self.routes,
            calls: Mutex::new(Vec::new()),
        }
    }
}
