use oikos_core::{NormalizedSeries, OikosError, RegionCode, SeriesId, YearRange};

use crate::Oikos;
use crate::router::util::collapse_errors;

impl Oikos {
    /// Fetch one indicator for several regions, routing across registered
    /// regional sources in priority order.
    ///
    /// Returns one series per requested region, in request order. Sources
    /// without the regional capability are skipped; failures fall through
    /// to the next source and collapse like [`Oikos::series`].
    ///
    /// # Errors
    /// Returns `Unsupported` when no registered source serves regional
    /// observations, otherwise the collapsed per-source failures.
    #[tracing::instrument(skip(self, regions, years), fields(indicator = %indicator))]
    pub async fn regional(
        &self,
        indicator: &SeriesId,
        regions: &[RegionCode],
        years: &YearRange,
    ) -> Result<Vec<NormalizedSeries>, OikosError> {
        let mut attempted = false;
        let mut errors: Vec<OikosError> = Vec::new();
        for source in self.ordered() {
            let Some(provider) = source.as_regional_observations_provider() else {
                continue;
            };
            attempted = true;
            match self
                .source_call(
                    source.name(),
                    "regional_observations",
                    provider.regional_observations(indicator, regions, years),
                )
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
            "regional_observations",
            attempted,
            errors,
            Some(indicator.as_str()),
        ))
    }
}
