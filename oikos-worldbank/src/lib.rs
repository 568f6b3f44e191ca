//! oikos-worldbank
//!
//! Source adapter for the World Bank indicators REST API. Serves one
//! normalized series per (indicator, region) pair over a year window,
//! walking the upstream's page/pages pagination until the full result is
//! in hand.
//!
//! The World Bank API needs no key. It reports bad indicator and country
//! codes inside an HTTP 200 body, so error normalization here is driven
//! by response shape rather than status code.
#![warn(missing_docs)]

/// Construction of configured connectors.
pub mod builder;
/// Well-known World Bank indicator codes.
pub mod catalog;
mod client;

use async_trait::async_trait;
use oikos_core::source::{OikosSource, RegionalObservationsProvider};
use oikos_core::{NormalizedSeries, OikosError, RegionCode, SeriesId, YearRange};

use crate::builder::WorldBankConnectorBuilder;
use crate::client::WorldBankClient;

/// Stable source name, also used as the orchestrator key.
pub const NAME: &str = "oikos-worldbank";

/// Public connector type for the World Bank upstream.
pub struct WorldBankConnector {
    client: WorldBankClient,
}

impl WorldBankConnector {
    /// Returns an unconfigured builder. Customize with the builder methods
    /// before calling `.build()`.
    #[must_use]
    pub fn builder() -> WorldBankConnectorBuilder {
        WorldBankConnectorBuilder::new()
    }

    /// Build a connector against the production endpoint with default
    /// HTTP settings.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be
    /// constructed.
    pub fn new_default() -> Result<Self, OikosError> {
        Self::builder().build()
    }

    pub(crate) const fn from_client(client: WorldBankClient) -> Self {
        Self { client }
    }
}

impl OikosSource for WorldBankConnector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn vendor(&self) -> &'static str {
        "The World Bank"
    }

    fn as_regional_observations_provider(&self) -> Option<&dyn RegionalObservationsProvider> {
        Some(self as &dyn RegionalObservationsProvider)
    }
}

#[async_trait]
impl RegionalObservationsProvider for WorldBankConnector {
    async fn regional_observations(
        &self,
        indicator: &SeriesId,
        regions: &[RegionCode],
        years: &YearRange,
    ) -> Result<Vec<NormalizedSeries>, OikosError> {
        if regions.is_empty() {
            return Err(OikosError::InvalidArg(
                "at least one region code is required".into(),
            ));
        }
        self.client
            .regional_observations(indicator, regions, years)
            .await
    }
}
