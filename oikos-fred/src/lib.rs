//! oikos-fred
//!
//! Source adapter for the FRED (Federal Reserve Economic Data) REST API.
//! Serves dated observations and series metadata, normalizing FRED's
//! offset/limit pagination into a single logical sequence per call.
//!
//! FRED requires an API key; construction without one is allowed, but any
//! fetch fails with `AuthRequired` before a single request leaves the
//! process. Keys are passed explicitly at construction, never read from
//! the environment by this crate.
#![warn(missing_docs)]

/// Construction of configured connectors.
pub mod builder;
/// Well-known FRED series mnemonics.
pub mod catalog;
mod client;

use async_trait::async_trait;
use oikos_core::source::{ObservationsProvider, OikosSource, SeriesInfoProvider};
use oikos_core::{NormalizedSeries, OikosError, SeriesId, SeriesMeta, SeriesRequest};

use crate::builder::FredConnectorBuilder;
use crate::client::FredClient;

/// Stable source name, also used as the orchestrator key.
pub const NAME: &str = "oikos-fred";

/// Public connector type for the FRED upstream.
pub struct FredConnector {
    client: FredClient,
}

impl FredConnector {
    /// Returns an unconfigured builder. Customize with the builder methods
    /// before calling `.build()`.
    #[must_use]
    pub fn builder() -> FredConnectorBuilder {
        FredConnectorBuilder::new()
    }

    /// Build a connector against the production endpoint with the given
    /// API key and default HTTP settings.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be
    /// constructed.
    pub fn new_with_key(api_key: impl Into<String>) -> Result<Self, OikosError> {
        Self::builder().api_key(api_key).build()
    }

    pub(crate) const fn from_client(client: FredClient) -> Self {
        Self { client }
    }
}

impl OikosSource for FredConnector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn vendor(&self) -> &'static str {
        "Federal Reserve Bank of St. Louis"
    }

    fn as_observations_provider(&self) -> Option<&dyn ObservationsProvider> {
        Some(self as &dyn ObservationsProvider)
    }

    fn as_series_info_provider(&self) -> Option<&dyn SeriesInfoProvider> {
        Some(self as &dyn SeriesInfoProvider)
    }
}

#[async_trait]
impl ObservationsProvider for FredConnector {
    async fn observations(
        &self,
        id: &SeriesId,
        req: &SeriesRequest,
    ) -> Result<NormalizedSeries, OikosError> {
        let observations = self.client.observations(id, req).await?;
        let meta = SeriesMeta {
            frequency: oikos_core::infer_frequency(
                &observations.iter().map(|o| o.date).collect::<Vec<_>>(),
            ),
            ..SeriesMeta::default()
        };
        Ok(NormalizedSeries::new(id.clone(), meta, observations).clamped(req))
    }
}

#[async_trait]
impl SeriesInfoProvider for FredConnector {
    async fn series_info(&self, id: &SeriesId) -> Result<SeriesMeta, OikosError> {
        self.client.series_info(id).await
    }
}
