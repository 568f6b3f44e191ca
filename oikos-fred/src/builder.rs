use url::Url;

use oikos_core::OikosError;

use crate::FredConnector;
use crate::client::FredClient;

const DEFAULT_BASE_URL: &str = "https://api.stlouisfed.org/fred/";

// FRED caps `limit` at 100_000; a smaller default keeps single responses
// modest without changing semantics.
const DEFAULT_PAGE_LIMIT: usize = 10_000;

/// Builder for a configured [`FredConnector`].
///
/// Behavior and trade-offs:
/// - The API key is optional at build time: a connector without a key
///   still constructs, but every fetch fails with `AuthRequired` before
///   any request is sent. This keeps key handling explicit at the call
///   site instead of in ambient process state.
/// - `base_url` exists for test injection and self-hosted proxies; it
///   must parse as an absolute URL and is normalized to end with `/` so
///   endpoint paths join predictably.
pub struct FredConnectorBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    http: Option<reqwest::Client>,
    page_limit: usize,
}

impl Default for FredConnectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FredConnectorBuilder {
    /// Create a builder with production defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            http: None,
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }

    /// Set the FRED API key to pass through on every request.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
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

    /// Override the per-page observation limit (1..=100_000).
    #[must_use]
    pub const fn page_limit(mut self, limit: usize) -> Self {
        self.page_limit = limit;
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// - `InvalidArg` when the base URL does not parse or the page limit
    ///   is out of range.
    /// - `Upstream` when the default HTTP client cannot be constructed.
    pub fn build(self) -> Result<FredConnector, OikosError> {
        if self.page_limit == 0 || self.page_limit > 100_000 {
            return Err(OikosError::InvalidArg(format!(
                "page limit must be in 1..=100000, got {}",
                self.page_limit
            )));
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

        Ok(FredConnector::from_client(FredClient::new(
            http,
            base_url,
            self.api_key,
            self.page_limit,
        )))
    }
}
