#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use oikos_core::source::{
    ObservationsProvider, OikosSource, RegionalObservationsProvider, SeriesInfoProvider,
};
use oikos_core::{
    NormalizedSeries, Observation, OikosError, RegionCode, SeriesId, SeriesMeta, SeriesRequest,
    YearRange,
};

/// Simple in-memory source used by integration tests. Tailor behavior per
/// test via the closure fields; a capability is advertised only when its
/// closure is set.
pub struct TestSource {
    pub name: &'static str,
    pub delay_ms: u64,
    pub observations_fn: Option<
        Arc<dyn Fn(&SeriesId, &SeriesRequest) -> Result<NormalizedSeries, OikosError> + Send + Sync>,
    >,
    pub regional_fn: Option<
        Arc<
            dyn Fn(&SeriesId, &[RegionCode], &YearRange) -> Result<Vec<NormalizedSeries>, OikosError>
                + Send
                + Sync,
        >,
    >,
    pub info_fn: Option<Arc<dyn Fn(&SeriesId) -> Result<SeriesMeta, OikosError> + Send + Sync>>,
}

impl Default for TestSource {
    fn default() -> Self {
        Self {
            name: "test-source",
            delay_ms: 0,
            observations_fn: None,
            regional_fn: None,
            info_fn: None,
        }
    }
}

impl TestSource {
    pub fn serving(
        name: &'static str,
        f: impl Fn(&SeriesId, &SeriesRequest) -> Result<NormalizedSeries, OikosError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            name,
            observations_fn: Some(Arc::new(f)),
            ..Self::default()
        }
    }

    async fn maybe_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.delay_ms)).await;
        }
    }
}

impl OikosSource for TestSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "Test"
    }

    fn as_observations_provider(&self) -> Option<&dyn ObservationsProvider> {
        self.observations_fn
            .is_some()
            .then_some(self as &dyn ObservationsProvider)
    }

    fn as_regional_observations_provider(&self) -> Option<&dyn RegionalObservationsProvider> {
        self.regional_fn
            .is_some()
            .then_some(self as &dyn RegionalObservationsProvider)
    }

    fn as_series_info_provider(&self) -> Option<&dyn SeriesInfoProvider> {
        self.info_fn
            .is_some()
            .then_some(self as &dyn SeriesInfoProvider)
    }
}

#[async_trait]
impl ObservationsProvider for TestSource {
    async fn observations(
        &self,
        id: &SeriesId,
        req: &SeriesRequest,
    ) -> Result<NormalizedSeries, OikosError> {
        self.maybe_delay().await;
        match &self.observations_fn {
            Some(f) => f(id, req),
            None => Err(OikosError::unsupported("observations")),
        }
    }
}

#[async_trait]
impl RegionalObservationsProvider for TestSource {
    async fn regional_observations(
        &self,
        indicator: &SeriesId,
        regions: &[RegionCode],
        years: &YearRange,
    ) -> Result<Vec<NormalizedSeries>, OikosError> {
        self.maybe_delay().await;
        match &self.regional_fn {
            Some(f) => f(indicator, regions, years),
            None => Err(OikosError::unsupported("regional_observations")),
        }
    }
}

#[async_trait]
impl SeriesInfoProvider for TestSource {
    async fn series_info(&self, id: &SeriesId) -> Result<SeriesMeta, OikosError> {
        self.maybe_delay().await;
        match &self.info_fn {
            Some(f) => f(id),
            None => Err(OikosError::unsupported("series_info")),
        }
    }
}

// ---------- Lightweight fixtures and helpers for tests ----------

pub fn sid(s: &str) -> SeriesId {
    SeriesId::new(s).expect("valid test identifier")
}

pub fn month(m: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, m, 1).expect("valid test date")
}

/// Monthly 2020 series with the given (month, value) rows.
pub fn m_series(name: &str, rows: &[(u32, Option<f64>)]) -> NormalizedSeries {
    NormalizedSeries::new(
        sid(name),
        SeriesMeta::default(),
        rows.iter()
            .map(|&(m, v)| Observation::new(month(m), v))
            .collect(),
    )
}
