use url::Url;

use oikos_core::OikosError;

use crate::WorldBankConnector;
use crate::client::WorldBankClient;

const DEFAULT_BASE_URL: &str = "https://api.worldbank.org/v2/";
const DEFAULT_PER_PAGE: usize = 1_000;

/// Builder for a configured [`WorldBankConnector`].
///
/// Behavior and trade-offs:
/// - No API key exists for this upstream, so the builder only carries
///   transport knobs.
/// - `base_url` exists for test injection; it must parse as an absolute
///   URL and is normalized to end with `/` so endpoint paths join
///   predictably.
/// - `per_page` trades request count against response size; semantics are
///   unchanged either way because all pages are concatenated before the
///   call returns.
pub struct WorldBankConnectorBuilder {
    base_url: Option<String>,
    http: Option<reqwest::Client>,
    per_page: usize,
}

impl Default for WorldBankConnectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldBankConnectorBuilder {
    /// Create a builder with production defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            base_url: None,
            http: None,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Override the upstream base URL (tests, proxies).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Provide a pre-configured `reqwest::Client`.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Override the per-page row count.
    #[must_use]
    pub const fn per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// - `InvalidArg` when the base URL does not parse or `per_page` is
    ///   zero.
    /// - `Upstream` when the default HTTP client cannot be constructed.
    pub fn build(self) -> Result<WorldBankConnector, OikosError> {
        if self.per_page == 0 {
            return Err(OikosError::InvalidArg("per_page must be >= 1".into()));
        }

        let mut raw = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base_url = Url::parse(&raw)
            .map_err(|e| OikosError::InvalidArg(format!("bad base URL {raw:?}: {e}")))?;

        let http = match self.http {
            Some(client) => client,
            None => reqwest::Client::builder()
                .build()
                .map_err(|e| OikosError::upstream(crate::NAME, e.to_string()))?,
        };

        Ok(WorldBankConnector::from_client(WorldBankClient::new(
            http,
            base_url,
            self.per_page,
        )))
    }
}
