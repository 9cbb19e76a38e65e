use adressen_core::normalize::normalize_matches;
use adressen_core::{AdressenError, Capability, MatchQuery, Resolution, UpstreamRequest};

use crate::Adressen;

impl Adressen {
    /// Match structured address fields against the address registry.
    ///
    /// Behavior and trade-offs:
    /// - Diacritics are stripped from every populated field before it is sent;
    ///   absent and empty fields are left out of the request.
    /// - A query without any populated field resolves to an empty list
    ///   without calling the upstream.
    /// - A wrapped upstream list stays a list and an unwrapped single record
    ///   stays a singleton ([`Resolution::One`]).
    /// - An unreadable body resolves to an empty list.
    ///
    /// # Errors
    /// Propagates the upstream error when the single call fails.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "adressen::router::match_address", skip(self))
    )]
    pub async fn match_address(&self, query: &MatchQuery) -> Result<Resolution, AdressenError> {
        if query.is_empty() {
            return Ok(Resolution::empty());
        }
        let req = UpstreamRequest::new(self.endpoints.address_match.clone()).params(query.params());
        let body = self.fetch(Capability::Match, req).await?;

        let normalized = normalize_matches(&body, self.localization());
        #[cfg(feature = "tracing")]
        if let Some(err) = normalized
            .empty_reason()
            .and_then(|r| r.to_error(self.upstream_name()))
        {
            tracing::warn!(error = %err, "match body treated as empty");
        }
        Ok(normalized.into_resolution())
    }
}
