use adressen_core::normalize::normalize_matches;
use adressen_core::{AdressenError, Capability, DetailRef, Resolution, UpstreamRequest};

use crate::Adressen;

impl Adressen {
    /// Dereference a single address record.
    ///
    /// Behavior and trade-offs:
    /// - `DetailRef::Uri` is fetched as-is; `DetailRef::Id` is appended as a
    ///   path segment to the address-match endpoint.
    /// - A record that does not exist is always `NotFound`: an upstream 404, an
    ///   empty or unreadable body and an empty list all map to it.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an empty or unusable reference, `NotFound` as
    /// described above, or the upstream error for any other failure.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "adressen::router::detail",
            skip(self, reference),
            fields(reference = %reference),
        )
    )]
    pub async fn detail(&self, reference: &DetailRef) -> Result<Resolution, AdressenError> {
        let url = reference.resolve(&self.endpoints.address_match)?;
        let not_found = || AdressenError::not_found(format!("details for {reference}"));

        let body = match self.fetch(Capability::Detail, UpstreamRequest::new(url)).await {
            Ok(body) => body,
            Err(e) if e.upstream_status() == Some(404) => return Err(not_found()),
            Err(e) => return Err(e),
        };

        let normalized = normalize_matches(&body, self.localization());
        #[cfg(feature = "tracing")]
        if let Some(reason) = normalized.empty_reason() {
            tracing::debug!(?reason, "detail body yielded no record");
        }
        let resolution = normalized.into_resolution();
        if resolution.is_empty() {
            return Err(not_found());
        }
        Ok(resolution)
    }
}
