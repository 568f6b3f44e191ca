use async_trait::async_trait;

use crate::OikosError;
use crate::types::{
    BatchObservations, NormalizedSeries, RegionCode, SeriesId, SeriesMeta, SeriesRequest,
    SourceKey, YearRange,
};

/// Focused role trait for sources that serve dated observations by
/// identifier (FRED-style).
#[async_trait]
pub trait ObservationsProvider: Send + Sync {
    /// Fetch every observation for `id` inside the request window.
    ///
    /// Sources must normalize whatever paging mechanism their upstream uses
    /// into a single logical sequence before returning: all pages are
    /// fetched and concatenated, never partially yielded. The returned
    /// series honors the `NormalizedSeries` ordering invariant and lies
    /// within the request window.
    async fn observations(
        &self,
        id: &SeriesId,
        req: &SeriesRequest,
    ) -> Result<NormalizedSeries, OikosError>;

    /// Fetch several identifiers, isolating per-identifier failures.
    ///
    /// The provided implementation fetches sequentially in the order given
    /// and never aborts the batch: a failure for one identifier lands in
    /// `failures` while the others proceed. Sources may override with a
    /// concurrent implementation as long as the outcome stays keyed by
    /// identifier and content-identical.
    async fn observations_batch(
        &self,
        ids: &[SeriesId],
        req: &SeriesRequest,
    ) -> BatchObservations {
        let mut out = BatchObservations::default();
        for id in ids {
            match self.observations(id, req).await {
                Ok(series) => {
                    out.series.insert(id.clone(), series);
                }
                Err(e) => {
                    out.failures.insert(id.clone(), e);
                }
            }
        }
        out
    }
}

/// Focused role trait for sources that serve one series per
/// (indicator, region) pair (World-Bank-style).
#[async_trait]
pub trait RegionalObservationsProvider: Send + Sync {
    /// Fetch `indicator` for each region over the year window.
    ///
    /// Returns one `NormalizedSeries` per requested region, in request
    /// order. Years the upstream has no datum for are absent from the
    /// series, not interpolated.
    async fn regional_observations(
        &self,
        indicator: &SeriesId,
        regions: &[RegionCode],
        years: &YearRange,
    ) -> Result<Vec<NormalizedSeries>, OikosError>;
}

/// Focused role trait for sources that expose series metadata
/// (title, unit, native frequency).
#[async_trait]
pub trait SeriesInfoProvider: Send + Sync {
    /// Fetch metadata for `id`.
    async fn series_info(&self, id: &SeriesId) -> Result<SeriesMeta, OikosError>;
}

/// The primary source interface. One implementation per upstream.
///
/// Capabilities are advertised through the `as_*` accessors; the default
/// implementations return `None`, so a source only overrides the roles it
/// actually serves. The orchestrator skips sources that do not advertise
/// the capability a request needs. Implementations must not mutate
/// caller-supplied inputs and must not share mutable state across calls.
pub trait OikosSource: Send + Sync {
    /// Unique, stable source name (e.g. "oikos-fred").
    fn name(&self) -> &'static str;

    /// Human-readable upstream vendor (e.g. "Federal Reserve Bank of St. Louis").
    fn vendor(&self) -> &'static str;

    /// Typed key for orchestrator priority configuration.
    fn key(&self) -> SourceKey {
        SourceKey::new(self.name())
    }

    /// Access the observations capability, if served.
    fn as_observations_provider(&self) -> Option<&dyn ObservationsProvider> {
        None
    }

    /// Access the regional observations capability, if served.
    fn as_regional_observations_provider(&self) -> Option<&dyn RegionalObservationsProvider> {
        None
    }

    /// Access the series metadata capability, if served.
    fn as_series_info_provider(&self) -> Option<&dyn SeriesInfoProvider> {
        None
    }
}
