use adressen_core::normalize::{normalize_locations, normalize_matches, parse_suggestions};
use adressen_core::{
    AddressEnvelope, AddressMatch, AdressenError, Capability, Location, MatchQuery, SearchReport,
    SearchStrategy, UpstreamRequest, merge_unique, search_phrase,
};

use crate::Adressen;
use crate::router::util::{join_with_deadline, settle};

impl Adressen {
    /// Resolve a free-text phrase into a deduplicated address report.
    ///
    /// Behavior and trade-offs:
    /// - One pair of enclosing double quotes is stripped from `query`; a phrase
    ///   that is empty afterwards is rejected before any upstream call.
    /// - The configured [`SearchStrategy`] picks the pipeline. Fan-out stages
    ///   run concurrently and merge in request order by record identity.
    /// - Failed sources inside a fan-out stage are reported in
    ///   [`SearchReport::warnings`]; the search fails only when a whole stage
    ///   failed or the suggestion call itself failed.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an empty phrase, the upstream error for a
    /// failed single call, or the collapsed stage error when every source of
    /// a fan-out stage failed.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "adressen::router::search",
            skip(self),
            fields(strategy = ?self.cfg.search_strategy),
        )
    )]
    pub async fn search(&self, query: &str) -> Result<SearchReport, AdressenError> {
        let phrase = search_phrase(query)?;
        let (addresses, warnings): (Vec<AddressEnvelope>, _) = match self.cfg.search_strategy {
            SearchStrategy::Direct => {
                let (locations, warnings) = self.search_direct(phrase).await?;
                (locations.into_iter().map(Into::into).collect(), warnings)
            }
            SearchStrategy::SuggestThenLocate => {
                let (locations, warnings) = self.suggest_and_locate(phrase).await?;
                (locations.into_iter().map(Into::into).collect(), warnings)
            }
            SearchStrategy::SuggestLocateMatch => {
                let (locations, mut warnings) = self.suggest_and_locate(phrase).await?;
                let (matches, more) = self.match_locations(&locations).await?;
                warnings.extend(more);
                (matches.into_iter().map(Into::into).collect(), warnings)
            }
        };
        Ok(SearchReport {
            addresses,
            warnings,
        })
    }

    async fn search_direct(
        &self,
        phrase: &str,
    ) -> Result<(Vec<Location>, Vec<AdressenError>), AdressenError> {
        let mut req = UpstreamRequest::new(self.endpoints.location.clone())
            .param("q", phrase)
            .param("c", self.cfg.search_result_count.to_string());
        if let Some(t) = &self.cfg.search_location_type {
            req = req.param("type", t.as_str());
        }

        let body = self.fetch(Capability::Search, req).await?;
        let normalized = normalize_locations(&body, self.localization());
        let warnings: Vec<AdressenError> = normalized
            .empty_reason()
            .and_then(|r| r.to_error(self.upstream_name()))
            .into_iter()
            .collect();
        Ok((merge_unique([normalized.into_vec()]), warnings))
    }

    /// Suggestion call followed by one location call per suggestion.
    async fn suggest_and_locate(
        &self,
        phrase: &str,
    ) -> Result<(Vec<Location>, Vec<AdressenError>), AdressenError> {
        let req = UpstreamRequest::new(self.endpoints.suggestion.clone())
            .param("q", phrase)
            .param("c", self.cfg.suggestion_count.to_string());
        let body = self.fetch(Capability::Suggestion, req).await?;

        let suggestions = match parse_suggestions(&body) {
            Ok(s) => s,
            Err(reason) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(?reason, "no usable suggestions");
                let warnings = reason.to_error(self.upstream_name()).into_iter().collect();
                return Ok((Vec::new(), warnings));
            }
        };

        let l10n = self.localization();
        let tasks = suggestions.iter().map(|s| {
            let req = UpstreamRequest::new(self.endpoints.location.clone())
                .param("q", s.as_str())
                .param("c", "1");
            async move {
                self.fetch(Capability::Location, req)
                    .await
                    .map(|body| normalize_locations(&body, l10n))
            }
        });
        let results =
            join_with_deadline(tasks, Capability::Location, self.cfg.request_timeout).await?;
        let settled = settle(Capability::Location, self.upstream_name(), results)?;
        Ok((merge_unique(settled.lists), settled.failures))
    }

    /// One address-match call per location; locations without any structured
    /// field are skipped without a call.
    async fn match_locations(
        &self,
        locations: &[Location],
    ) -> Result<(Vec<AddressMatch>, Vec<AdressenError>), AdressenError> {
        let l10n = self.localization();
        let tasks = locations
            .iter()
            .map(MatchQuery::from_location)
            .filter(|q| !q.is_empty())
            .map(|q| {
                let req =
                    UpstreamRequest::new(self.endpoints.address_match.clone()).params(q.params());
                async move {
                    self.fetch(Capability::Match, req)
                        .await
                        .map(|body| normalize_matches(&body, l10n))
                }
            });
        let results = join_with_deadline(tasks, Capability::Match, self.cfg.request_timeout).await?;
        let settled = settle(Capability::Match, self.upstream_name(), results)?;
        Ok((merge_unique(settled.lists), settled.failures))
    }
}
