use thiserror::Error;

/// Unified error type for the oikos workspace.
///
/// This wraps caller-input validation, upstream-tagged transport failures,
/// unknown-identifier conditions, schema mismatches, and an aggregate for
/// multi-source attempts. Adapters are responsible for mapping their
/// upstream's raw failures into this taxonomy before returning; callers
/// never see provider-specific error shapes.
#[derive(Debug, Error)]
pub enum OikosError {
    /// The requested capability is not implemented by the target source.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "observations").
        capability: &'static str,
    },

    /// Issues with the returned or assembled data (duplicate columns, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The upstream rejected the series/indicator identifier as unknown.
    ///
    /// Not retryable: the identifier will stay unknown until the caller
    /// changes it.
    #[error("unknown series identifier: {id}")]
    InvalidIdentifier {
        /// The identifier the upstream rejected.
        id: String,
    },

    /// A required API key is absent or was rejected.
    ///
    /// Raised before any network call when the key is statically known to
    /// be missing.
    #[error("{upstream} requires an API key")]
    AuthRequired {
        /// Source name that requires authentication.
        upstream: String,
    },

    /// Transport failure or upstream 5xx. The caller may retry; this layer
    /// performs no automatic retry.
    #[error("{upstream} unavailable: {msg}")]
    Upstream {
        /// Source name that failed.
        upstream: String,
        /// Human-readable transport/status description.
        msg: String,
    },

    /// The upstream response did not match the expected schema.
    #[error("{upstream} returned a malformed response: {msg}")]
    Malformed {
        /// Source name whose response could not be decoded.
        upstream: String,
        /// What failed to decode.
        msg: String,
    },

    /// An individual source call exceeded the configured timeout.
    #[error("source timed out: {capability} via {upstream}")]
    SourceTimeout {
        /// Source name that timed out.
        upstream: String,
        /// Capability label (e.g. "observations", "series_info").
        capability: &'static str,
    },

    /// All eligible sources failed; contains the individual failures.
    #[error("all sources failed: {0:?}")]
    AllSourcesFailed(Vec<OikosError>),
}

impl OikosError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub const fn unsupported(cap: &'static str) -> Self {
        Self::Unsupported { capability: cap }
    }

    /// Helper: build an `InvalidIdentifier` error for a rejected id.
    pub fn invalid_identifier(id: impl Into<String>) -> Self {
        Self::InvalidIdentifier { id: id.into() }
    }

    /// Helper: build an `AuthRequired` error for a source name.
    pub fn auth_required(upstream: impl Into<String>) -> Self {
        Self::AuthRequired {
            upstream: upstream.into(),
        }
    }

    /// Helper: build an `Upstream` error with the source name and message.
    pub fn upstream(upstream: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Upstream {
            upstream: upstream.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Malformed` error with the source name and message.
    pub fn malformed(upstream: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Malformed {
            upstream: upstream.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `SourceTimeout` error.
    pub fn source_timeout(upstream: impl Into<String>, capability: &'static str) -> Self {
        Self::SourceTimeout {
            upstream: upstream.into(),
            capability,
        }
    }

    /// Whether a caller-side retry could plausibly succeed.
    ///
    /// Only transport-level failures and timeouts qualify; identifier,
    /// authentication, schema, and argument errors are permanent until the
    /// caller changes something.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Upstream { .. } | Self::SourceTimeout { .. }
        )
    }
}
