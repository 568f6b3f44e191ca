//! Oikos orchestrates requests across multiple economic data sources.
//!
//! Overview
//! - Routes requests to source adapters that implement the `oikos_core`
//!   contracts (FRED-style observations, World-Bank-style regional
//!   indicators, series metadata).
//! - Applies a configurable priority order with per-request fallback:
//!   an identifier one source rejects is tried against the next.
//! - Isolates per-identifier failures in batch fetches, so one bad
//!   identifier never discards the data the other identifiers returned.
//! - Merges fetched series onto a single date axis with explicit
//!   gap-filling policies via the table builder.
//!
//! Key behaviors and trade-offs
//! - Fetching is sequential and retry-free by default: the conservative
//!   semantics callers can reason about. `concurrent_batch(true)` fans a
//!   batch out with deterministic, identifier-keyed assembly — latency
//!   changes, content does not.
//! - An optional per-source timeout bounds each provider call; absent by
//!   default, the transport's own limits apply.
//! - No caching and no shared state across calls; every fetch is
//!   independent.
//!
//! Examples
//! Building an orchestrator with a preferred source order:
//! ```rust,ignore
//! use std::sync::Arc;
//! use oikos::Oikos;
//!
//! let fred = Arc::new(oikos_fred::FredConnector::new_with_key("...")?);
//! let wb = Arc::new(oikos_worldbank::WorldBankConnector::new_default()?);
//!
//! let oikos = Oikos::builder()
//!     .with_source(fred.clone())
//!     .with_source(wb.clone())
//!     .prefer_sources(&[wb.key(), fred.key()])
//!     .build()?;
//! ```
//!
//! Fetching one series and a merged table:
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use oikos::{FillPolicy, SeriesId, SeriesRequest};
//!
//! let gdp = SeriesId::new("GDP")?;
//! let req = SeriesRequest::from_start(NaiveDate::from_ymd_opt(2015, 1, 1).unwrap());
//! let series = oikos.series(&gdp, &req).await?;
//!
//! let report = oikos
//!     .table()
//!     .series(&[SeriesId::new("GDP")?, SeriesId::new("UNRATE")?])?
//!     .start(NaiveDate::from_ymd_opt(2015, 1, 1).unwrap())
//!     .fill_policy(FillPolicy::ForwardFill)
//!     .run()
//!     .await?;
//! for (id, err) in &report.failures {
//!     eprintln!("{id}: {err}");
//! }
//! ```
//!
//! See `oikos/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use crate::core::{Oikos, OikosBuilder, OikosConfig};
pub use router::table::{TableBuilder, TableReport};

// Re-export core types for convenience
pub use oikos_core::{
    BatchObservations,
    ColumnSummary,
    CorrelationMatrix,
    FillPolicy,
    Frequency,
    MergedTable,
    NormalizedSeries,
    Observation,
    OikosError,
    OikosSource,
    RegionCode,
    SeriesId,
    SeriesMeta,
    SeriesRequest,
    SourceKey,
    YearRange,
    correlation_matrix,
    describe,
    growth_rate,
    log_returns,
    merge,
    moving_average,
};
