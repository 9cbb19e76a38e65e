use std::sync::Arc;
use std::time::Duration;

use adressen_core::normalize::Localization;
use adressen_core::{
    AdressenConfig, AdressenError, Capability, Endpoints, SearchStrategy, UpstreamClient,
    UpstreamRequest,
};
use url::Url;

/// Orchestrator that resolves address queries through one upstream client.
pub struct Adressen {
    pub(crate) upstream: Arc<dyn UpstreamClient>,
    pub(crate) cfg: AdressenConfig,
    pub(crate) endpoints: ResolvedEndpoints,
}

/// Endpoint URLs parsed once at build time.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedEndpoints {
    pub(crate) suggestion: Url,
    pub(crate) location: Url,
    pub(crate) address_match: Url,
}

/// Builder for constructing an `Adressen` orchestrator with custom configuration.
pub struct AdressenBuilder {
    upstream: Option<Arc<dyn UpstreamClient>>,
    cfg: AdressenConfig,
}

impl Default for AdressenBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AdressenBuilder {
    /// Create a new builder with the default configuration.
    ///
    /// Behavior and trade-offs:
    /// - Starts without an upstream; you must register one via [`with_upstream`](Self::with_upstream).
    /// - Defaults target the public Flemish registries with country "België",
    ///   primary language "nl", the `Direct` search strategy and a 5s upstream timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            upstream: None,
            cfg: AdressenConfig::default(),
        }
    }

    /// Register the upstream client every call goes through.
    ///
    /// Registering again replaces the previous client.
    #[must_use]
    pub fn with_upstream(mut self, upstream: Arc<dyn UpstreamClient>) -> Self {
        self.upstream = Some(upstream);
        self
    }

    /// Replace the whole configuration.
    ///
    /// Modifiers called afterwards still apply on top of it.
    #[must_use]
    pub fn config(mut self, cfg: AdressenConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Override the upstream endpoint URLs.
    #[must_use]
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.cfg.endpoints = endpoints;
        self
    }

    /// Country written onto every address envelope.
    #[must_use]
    pub fn default_country(mut self, country: impl Into<String>) -> Self {
        self.cfg.default_country = country.into();
        self
    }

    /// Language whose display names receive the country suffix.
    #[must_use]
    pub fn primary_language(mut self, language: impl Into<String>) -> Self {
        self.cfg.primary_language = language.into();
        self
    }

    /// Select the free-text search pipeline.
    ///
    /// Behavior and trade-offs:
    /// - `Direct`: one upstream call per search; exact phrases only.
    /// - `SuggestThenLocate`: one suggestion call plus one location call per
    ///   suggestion; tolerant of typos.
    /// - `SuggestLocateMatch`: as above plus one address-match call per unique
    ///   location; returns registry records instead of location records.
    #[must_use]
    pub const fn search_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.cfg.search_strategy = strategy;
        self
    }

    /// Result cap for the direct location search.
    #[must_use]
    pub const fn search_result_count(mut self, count: u32) -> Self {
        self.cfg.search_result_count = count;
        self
    }

    /// Result cap for the fuzzy suggestion call.
    #[must_use]
    pub const fn suggestion_count(mut self, count: u32) -> Self {
        self.cfg.suggestion_count = count;
        self
    }

    /// Set the per-upstream-call timeout.
    ///
    /// Behavior and trade-offs:
    /// - Every upstream call is bounded; a timed-out call surfaces as
    ///   `UpstreamTimeout` for single-call operations and is absorbed like any
    ///   other failed source inside a fan-out stage.
    #[must_use]
    pub const fn upstream_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.upstream_timeout = timeout;
        self
    }

    /// Set an overall deadline for each fan-out stage.
    ///
    /// Behavior and trade-offs:
    /// - When the deadline elapses the whole stage fails with `RequestTimeout`;
    ///   partial results are never merged.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Build the `Adressen` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` when no upstream was registered, an endpoint is not
    /// an absolute URL, or a result cap is zero.
    pub fn build(self) -> Result<Adressen, AdressenError> {
        let Some(upstream) = self.upstream else {
            return Err(AdressenError::invalid_arg(
                "an upstream client is required; register one with with_upstream",
            ));
        };
        if self.cfg.search_result_count == 0 || self.cfg.suggestion_count == 0 {
            return Err(AdressenError::invalid_arg("result caps must be positive"));
        }
        let endpoints = ResolvedEndpoints {
            suggestion: parse_endpoint("suggestion", &self.cfg.endpoints.suggestion)?,
            location: parse_endpoint("location", &self.cfg.endpoints.location)?,
            address_match: parse_endpoint("address_match", &self.cfg.endpoints.address_match)?,
        };
        Ok(Adressen {
            upstream,
            cfg: self.cfg,
            endpoints,
        })
    }
}

fn parse_endpoint(label: &str, raw: &str) -> Result<Url, AdressenError> {
    let url = Url::parse(raw).map_err(|e| {
        AdressenError::invalid_arg(format!("{label} endpoint '{raw}' is not an absolute URL: {e}"))
    })?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(AdressenError::invalid_arg(format!(
            "{label} endpoint '{raw}' must be an http(s) URL"
        )));
    }
    Ok(url)
}

/// Run `fut` under an optional deadline, mapping expiry to `RequestTimeout`.
pub(crate) async fn with_request_deadline<T, Fut>(
    deadline: Option<Duration>,
    capability: Capability,
    fut: Fut,
) -> Result<T, AdressenError>
where
    Fut: core::future::Future<Output = T>,
{
    match deadline {
        Some(d) => tokio::time::timeout(d, fut)
            .await
            .map_err(|_| AdressenError::request_timeout(capability.as_str())),
        None => Ok(fut.await),
    }
}

impl Adressen {
    /// Start building a new `Adressen` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use adressen::Adressen;
    /// use adressen_mock::MockUpstream;
    ///
    /// let adressen = Adressen::builder()
    ///     .with_upstream(Arc::new(MockUpstream::with_fixtures()))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> AdressenBuilder {
        AdressenBuilder::new()
    }

    /// Configuration this instance was built with.
    #[must_use]
    pub const fn config(&self) -> &AdressenConfig {
        &self.cfg
    }

    pub(crate) fn localization(&self) -> Localization<'_> {
        Localization {
            country: &self.cfg.default_country,
            primary_language: &self.cfg.primary_language,
        }
    }

    pub(crate) fn upstream_name(&self) -> &'static str {
        self.upstream.name()
    }

    /// Wrap an upstream future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "adressen::core::upstream_call_with_timeout",
            skip(fut),
            fields(
                upstream = upstream_name,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn upstream_call_with_timeout<T, Fut>(
        upstream_name: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, AdressenError>
    where
        Fut: core::future::Future<Output = Result<T, AdressenError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(AdressenError::upstream_timeout(upstream_name, capability)))
    }

    /// Issue one upstream call bounded by the configured upstream timeout.
    pub(crate) async fn fetch(
        &self,
        capability: Capability,
        req: UpstreamRequest,
    ) -> Result<Vec<u8>, AdressenError> {
        Self::upstream_call_with_timeout(
            self.upstream_name(),
            capability.as_str(),
            self.cfg.upstream_timeout,
            self.upstream.fetch(&req),
        )
        .await
    }
}
