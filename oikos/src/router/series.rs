use oikos_core::{NormalizedSeries, OikosError, SeriesId, SeriesMeta, SeriesRequest};

use crate::Oikos;
use crate::router::util::collapse_errors;

impl Oikos {
    /// Fetch one series, routing across registered sources in priority
    /// order.
    ///
    /// Behavior and trade-offs:
    /// - Sources that do not advertise the observations capability are
    ///   skipped; the first success wins.
    /// - A source rejecting the identifier does not end the request: a
    ///   FRED mnemonic unknown to one source may be served by the next.
    /// - The final error collapses the attempts: unanimous rejection
    ///   surfaces as `InvalidIdentifier`, a lone failure surfaces as
    ///   itself, anything mixed as `AllSourcesFailed`.
    ///
    /// # Errors
    /// Returns `Unsupported` when no registered source serves
    /// observations, otherwise the collapsed per-source failures.
    #[tracing::instrument(skip(self, req), fields(series = %id))]
    pub async fn series(
        &self,
        id: &SeriesId,
        req: &SeriesRequest,
    ) -> Result<NormalizedSeries, OikosError> {
        let mut attempted = false;
        let mut errors: Vec<OikosError> = Vec::new();
        for source in self.ordered() {
            let Some(provider) = source.as_observations_provider() else {
                continue;
            };
            attempted = true;
            match self
                .source_call(source.name(), "observations", provider.observations(id, req))
                .await
            {
                Ok(series) => return Ok(series),
                Err(e) => {
                    tracing::debug!(source = source.name(), error = %e, "source failed, falling through");
                    errors.push(e);
                }
            }
        }
        Err(collapse_errors(
            "observations",
            attempted,
            errors,
            Some(id.as_str()),
        ))
    }

    /// Fetch series metadata, routing across registered sources in
    /// priority order with the same fallback rules as
    /// [`Oikos::series`].
    ///
    /// # Errors
    /// Returns `Unsupported` when no registered source serves metadata,
    /// otherwise the collapsed per-source failures.
    #[tracing::instrument(skip(self), fields(series = %id))]
    pub async fn series_info(&self, id: &SeriesId) -> Result<SeriesMeta, OikosError> {
        let mut attempted = false;
        let mut errors: Vec<OikosError> = Vec::new();
        for source in self.ordered() {
            let Some(provider) = source.as_series_info_provider() else {
                continue;
            };
            attempted = true;
            match self
                .source_call(source.name(), "series_info", provider.series_info(id))
                .await
            {
                Ok(meta) => return Ok(meta),
                Err(e) => {
                    tracing::debug!(source = source.name(), error = %e, "source failed, falling through");
                    errors.push(e);
                }
            }
        }
        Err(collapse_errors(
            "series_info",
            attempted,
            errors,
            Some(id.as_str()),
        ))
    }
}
