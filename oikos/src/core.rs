use std::sync::Arc;
use std::time::Duration;

use oikos_core::{OikosError, OikosSource, SourceKey};

/// Orchestrator that routes requests across registered sources.
pub struct Oikos {
    pub(crate) sources: Vec<Arc<dyn OikosSource>>,
    pub(crate) cfg: OikosConfig,
}

impl std::fmt::Debug for Oikos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Oikos")
            .field(
                "sources",
                &self.sources.iter().map(|s| s.key()).collect::<Vec<_>>(),
            )
            .field("cfg", &self.cfg)
            .finish()
    }
}

/// Orchestrator configuration assembled by [`OikosBuilder`].
#[derive(Debug, Clone, Default)]
pub struct OikosConfig {
    /// Preferred source order; unlisted sources follow in registration
    /// order.
    pub priority: Vec<SourceKey>,
    /// Optional per-source call timeout. `None` leaves the transport's own
    /// limits in charge.
    pub source_timeout: Option<Duration>,
    /// Whether batch fetches fan out concurrently. Off by default;
    /// enabling it changes latency, never content.
    pub concurrent_batch: bool,
}

/// Builder for constructing an [`Oikos`] orchestrator with custom
/// configuration.
pub struct OikosBuilder {
    sources: Vec<Arc<dyn OikosSource>>,
    cfg: OikosConfig,
}

impl Default for OikosBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OikosBuilder {
    /// Create a new builder with conservative defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no sources; register at least one via
    ///   [`OikosBuilder::with_source`].
    /// - Defaults are the explicitly specified conservative ones:
    ///   sequential batch fetches, no retry, no timeout beyond the
    ///   transport's own.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: vec![],
            cfg: OikosConfig::default(),
        }
    }

    /// Register a source adapter.
    ///
    /// Behavior and trade-offs:
    /// - Registration order is the fallback priority when
    ///   [`OikosBuilder::prefer_sources`] is not used.
    /// - Multiple sources can serve the same capability; routing falls
    ///   through to the next one when an earlier one fails.
    /// - Duplicates are not deduplicated; avoid registering the same
    ///   source twice.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn OikosSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Set a preferred source order by key.
    ///
    /// Behavior and trade-offs:
    /// - Listed sources are tried first, in list order; unlisted but
    ///   registered sources still follow afterwards, so this is an
    ///   ordering hint, not a filter.
    #[must_use]
    pub fn prefer_sources(mut self, keys: &[SourceKey]) -> Self {
        self.cfg.priority = keys.to_vec();
        self
    }

    /// Bound every per-source call with a timeout.
    ///
    /// Behavior and trade-offs:
    /// - A timed-out source counts as failed and routing falls through to
    ///   the next one; the timeout never truncates data.
    #[must_use]
    pub const fn source_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.source_timeout = Some(timeout);
        self
    }

    /// Fan batch fetches out concurrently.
    ///
    /// Behavior and trade-offs:
    /// - Results are assembled keyed by identifier either way, so content
    ///   is identical to the sequential default; only latency and request
    ///   fanout change.
    #[must_use]
    pub const fn concurrent_batch(mut self, yes: bool) -> Self {
        self.cfg.concurrent_batch = yes;
        self
    }

    /// Finish building.
    ///
    /// # Errors
    /// Returns `InvalidArg` when no sources were registered; an empty
    /// orchestrator could only ever answer `Unsupported`.
    pub fn build(self) -> Result<Oikos, OikosError> {
        if self.sources.is_empty() {
            return Err(OikosError::InvalidArg(
                "at least one source must be registered".into(),
            ));
        }
        Ok(Oikos {
            sources: self.sources,
            cfg: self.cfg,
        })
    }
}

impl Oikos {
    /// Start building a new `Oikos` instance.
    #[must_use]
    pub fn builder() -> OikosBuilder {
        OikosBuilder::new()
    }

    /// Registered sources in effective priority order: preferred keys
    /// first (in preference order), everything else in registration order.
    pub(crate) fn ordered(&self) -> Vec<Arc<dyn OikosSource>> {
        let mut out: Vec<Arc<dyn OikosSource>> = Vec::with_capacity(self.sources.len());
        for key in &self.cfg.priority {
            for s in &self.sources {
                if &s.key() == key && !out.iter().any(|o| o.name() == s.name()) {
                    out.push(s.clone());
                }
            }
        }
        for s in &self.sources {
            if !out.iter().any(|o| o.name() == s.name()) {
                out.push(s.clone());
            }
        }
        out
    }

    /// Wrap a provider future with the configured timeout and standardized
    /// timeout error mapping.
    #[tracing::instrument(
        name = "oikos::core::source_call",
        skip(self, fut),
        fields(source = source_name, capability = capability)
    )]
    pub(crate) async fn source_call<T, Fut>(
        &self,
        source_name: &'static str,
        capability: &'static str,
        fut: Fut,
    ) -> Result<T, OikosError>
    where
        Fut: Future<Output = Result<T, OikosError>>,
    {
        match self.cfg.source_timeout {
            Some(timeout) => (tokio::time::timeout(timeout, fut).await)
                .unwrap_or_else(|_| Err(OikosError::source_timeout(source_name, capability))),
            None => fut.await,
        }
    }
}
