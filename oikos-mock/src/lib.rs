//! oikos-mock
//!
//! Mock source for CI-safe examples and tests. Provides deterministic data
//! from static fixtures: a handful of FRED-style series, two World-Bank
//! style regional indicators, a bundled monthly CSV sample, and a seeded
//! synthetic generator.
//!
//! Two magic identifiers steer failure behavior in tests: `FAIL` forces an
//! upstream error and `TIMEOUT` sleeps briefly so orchestrator timeouts
//! can trip.

use async_trait::async_trait;
use oikos_core::source::{
    ObservationsProvider, OikosSource, RegionalObservationsProvider, SeriesInfoProvider,
};
use oikos_core::{
    NormalizedSeries, OikosError, RegionCode, SeriesId, SeriesMeta, SeriesRequest, YearRange,
};

mod fixtures;

pub use fixtures::sample::sample_series;
pub use fixtures::synthetic::synthetic_monthly;

/// Mock source backed by static fixtures.
pub struct MockSource;

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Build the mock source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail(id: &str, capability: &'static str) -> Result<(), OikosError> {
        match id {
            "FAIL" => Err(OikosError::upstream(
                "oikos-mock",
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                // Simulate brief latency; the orchestrator may time out
                // depending on config. Keep short to avoid slowing tests.
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl OikosSource for MockSource {
    fn name(&self) -> &'static str {
        "oikos-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_observations_provider(&self) -> Option<&dyn ObservationsProvider> {
        Some(self as &dyn ObservationsProvider)
    }

    fn as_regional_observations_provider(&self) -> Option<&dyn RegionalObservationsProvider> {
        Some(self as &dyn RegionalObservationsProvider)
    }

    fn as_series_info_provider(&self) -> Option<&dyn SeriesInfoProvider> {
        Some(self as &dyn SeriesInfoProvider)
    }
}

#[async_trait]
impl ObservationsProvider for MockSource {
    async fn observations(
        &self,
        id: &SeriesId,
        req: &SeriesRequest,
    ) -> Result<NormalizedSeries, OikosError> {
        Self::maybe_fail(id.as_str(), "observations").await?;
        fixtures::series::by_id(id.as_str())
            .map(|s| s.clamped(req))
            .ok_or_else(|| OikosError::invalid_identifier(id.as_str()))
    }
}

#[async_trait]
impl RegionalObservationsProvider for MockSource {
    async fn regional_observations(
        &self,
        indicator: &SeriesId,
        regions: &[RegionCode],
        years: &YearRange,
    ) -> Result<Vec<NormalizedSeries>, OikosError> {
        Self::maybe_fail(indicator.as_str(), "regional_observations").await?;
        if regions.is_empty() {
            return Err(OikosError::InvalidArg(
                "at least one region code is required".into(),
            ));
        }
        fixtures::regional::by_indicator(indicator, regions, years)
            .ok_or_else(|| OikosError::invalid_identifier(indicator.as_str()))
    }
}

#[async_trait]
impl SeriesInfoProvider for MockSource {
    async fn series_info(&self, id: &SeriesId) -> Result<SeriesMeta, OikosError> {
        Self::maybe_fail(id.as_str(), "series_info").await?;
        fixtures::series::by_id(id.as_str())
            .map(|s| s.meta().clone())
            .ok_or_else(|| OikosError::invalid_identifier(id.as_str()))
    }
}
