//! oikos-core
//!
//! Core types, traits, and utilities shared across the oikos ecosystem.
//!
//! - `types`: common data structures (series, observations, requests, tables).
//! - `source`: the `OikosSource` trait and capability provider traits.
//! - `timeseries`: helpers to merge, fill, and transform normalized series.
//!
//! Every source adapter in the workspace normalizes its upstream's response
//! shape into the `NormalizedSeries` representation defined here; the
//! `timeseries` module then aligns any number of those series onto a single
//! date axis (`MergedTable`) with explicit gap-filling semantics. All
//! operations are stateless: nothing in this crate caches, retries, or holds
//! a connection across calls.
#![warn(missing_docs)]

/// Unified error taxonomy for the oikos workspace.
pub mod error;
/// Capability traits and the primary `OikosSource` interface.
pub mod source;
/// Time-series utilities for merging, filling, and transforming series.
pub mod timeseries;
pub mod types;

pub use error::OikosError;
pub use source::{
    ObservationsProvider, OikosSource, RegionalObservationsProvider, SeriesInfoProvider,
};
pub use timeseries::fill::FillPolicy;
pub use timeseries::infer::infer_frequency;
pub use timeseries::merge::merge;
pub use timeseries::stats::{ColumnSummary, CorrelationMatrix, correlation_matrix, describe};
pub use timeseries::table::{Column, MergedTable};
pub use timeseries::transform::{growth_rate, log_returns, moving_average};
pub use types::*;
