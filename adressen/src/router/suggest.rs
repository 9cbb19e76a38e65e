use adressen_core::normalize::normalize_locations;
use adressen_core::{
    AddressEnvelope, AdressenError, Capability, CoordinateQuery, UpstreamRequest,
};

use crate::Adressen;

impl Adressen {
    /// Addresses around a coordinate pair, nearest first as the upstream ranks them.
    ///
    /// # Errors
    /// Returns `InvalidArg` for non-finite coordinates or a zero count, and
    /// propagates the upstream error when the single call fails.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "adressen::router::suggest_from_latlon", skip(self))
    )]
    pub async fn suggest_from_latlon(
        &self,
        query: &CoordinateQuery,
    ) -> Result<Vec<AddressEnvelope>, AdressenError> {
        let req = UpstreamRequest::new(self.endpoints.location.clone()).params(query.params()?);
        let body = self.fetch(Capability::Coordinate, req).await?;

        let normalized = normalize_locations(&body, self.localization());
        #[cfg(feature = "tracing")]
        if let Some(err) = normalized
            .empty_reason()
            .and_then(|r| r.to_error(self.upstream_name()))
        {
            tracing::warn!(error = %err, "coordinate body treated as empty");
        }
        Ok(normalized.into_vec().into_iter().map(Into::into).collect())
    }
}
