//! Common value types shared by sources and the aggregator.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::OikosError;

/// Opaque key naming one upstream indicator (a FRED mnemonic like `GDP`,
/// a World Bank code like `NY.GDP.MKTP.CD`). Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesId(String);

impl SeriesId {
    /// Construct a series identifier.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the identifier is empty or contains
    /// whitespace; upstream APIs treat both as undefined.
    pub fn new(id: impl Into<String>) -> Result<Self, OikosError> {
        let id = id.into();
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            return Err(OikosError::InvalidArg(format!(
                "series identifier must be non-empty and whitespace-free, got {id:?}"
            )));
        }
        Ok(Self(id))
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SeriesId {
    type Err = OikosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// ISO 3166-1 alpha-3 country/region code used by World-Bank-style sources.
///
/// Uppercased on construction; anything that is not exactly three ASCII
/// letters is rejected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionCode(String);

impl RegionCode {
    /// Construct a region code, normalizing to uppercase.
    ///
    /// # Errors
    /// Returns `InvalidArg` unless the input is exactly three ASCII letters.
    pub fn new(code: impl AsRef<str>) -> Result<Self, OikosError> {
        let code = code.as_ref();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(OikosError::InvalidArg(format!(
                "region code must be three ASCII letters, got {code:?}"
            )));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// The code as a string slice (always uppercase).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RegionCode {
    type Err = OikosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// One dated data point. `value` is `None` when the upstream reported the
/// period but marked the datum missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Calendar date of the observation at the series' resolution.
    pub date: NaiveDate,
    /// The value, or `None` for an explicit missing-data marker.
    pub value: Option<f64>,
}

impl Observation {
    /// Convenience constructor.
    #[must_use]
    pub const fn new(date: NaiveDate, value: Option<f64>) -> Self {
        Self { date, value }
    }
}

/// The single calendar resolution a source normalized a series to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// One observation per calendar day.
    Daily,
    /// One observation per week.
    Weekly,
    /// One observation per month.
    Monthly,
    /// One observation per quarter.
    Quarterly,
    /// One observation per year.
    Annual,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Annual => "annual",
        };
        f.write_str(s)
    }
}

/// Source-reported metadata attached to a normalized series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesMeta {
    /// Human-readable series title, if the upstream exposes one.
    pub title: Option<String>,
    /// Unit of measure (e.g. "Billions of Dollars", "Percent").
    pub unit: Option<String>,
    /// Resolution the source normalized the series to.
    pub frequency: Option<Frequency>,
    /// Whether the upstream reports the series as seasonally adjusted.
    pub seasonally_adjusted: Option<bool>,
}

/// Ordered sequence of observations for one identifier, plus source
/// metadata.
///
/// Invariant: dates are strictly increasing with no duplicates. The
/// constructors enforce this by sorting and keeping the first observation
/// seen for a date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedSeries {
    id: SeriesId,
    region: Option<RegionCode>,
    meta: SeriesMeta,
    observations: Vec<Observation>,
}

impl NormalizedSeries {
    /// Build a series from raw observations, establishing the ordering
    /// invariant (sorted ascending, first-wins on duplicate dates).
    #[must_use]
    pub fn new(id: SeriesId, meta: SeriesMeta, observations: Vec<Observation>) -> Self {
        Self::assemble(id, None, meta, observations)
    }

    /// Build a per-region series (World-Bank-style sources return one of
    /// these per (indicator, region) pair).
    #[must_use]
    pub fn new_regional(
        id: SeriesId,
        region: RegionCode,
        meta: SeriesMeta,
        observations: Vec<Observation>,
    ) -> Self {
        Self::assemble(id, Some(region), meta, observations)
    }

    fn assemble(
        id: SeriesId,
        region: Option<RegionCode>,
        meta: SeriesMeta,
        observations: Vec<Observation>,
    ) -> Self {
        let mut by_date: BTreeMap<NaiveDate, Observation> = BTreeMap::new();
        for obs in observations {
            by_date.entry(obs.date).or_insert(obs);
        }
        Self {
            id,
            region,
            meta,
            observations: by_date.into_values().collect(),
        }
    }

    /// The identifier this series was fetched for.
    #[must_use]
    pub const fn id(&self) -> &SeriesId {
        &self.id
    }

    /// The region this series belongs to, for regional sources.
    #[must_use]
    pub const fn region(&self) -> Option<&RegionCode> {
        self.region.as_ref()
    }

    /// Source-reported metadata.
    #[must_use]
    pub const fn meta(&self) -> &SeriesMeta {
        &self.meta
    }

    /// The ordered observations.
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the series carries no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// The column name this series contributes to a merged table: the
    /// identifier, suffixed with the region code when present
    /// (`NY.GDP.MKTP.CD.USA`).
    #[must_use]
    pub fn column_name(&self) -> String {
        match &self.region {
            Some(r) => format!("{}.{}", self.id, r),
            None => self.id.to_string(),
        }
    }

    /// Restrict the series to observations inside `req`'s date window.
    #[must_use]
    pub fn clamped(mut self, req: &SeriesRequest) -> Self {
        self.observations.retain(|o| req.contains(o.date));
        self
    }
}

/// Date window for an observations fetch. The end bound is optional and
/// inclusive; an absent end means "through the latest available datum".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesRequest {
    start: NaiveDate,
    end: Option<NaiveDate>,
}

impl SeriesRequest {
    /// Build a request for `[start, end]`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `end` precedes `start`.
    pub fn try_new(start: NaiveDate, end: Option<NaiveDate>) -> Result<Self, OikosError> {
        if let Some(end) = end
            && end < start
        {
            return Err(OikosError::InvalidArg(format!(
                "series request end {end} precedes start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Build an open-ended request starting at `start`.
    #[must_use]
    pub const fn from_start(start: NaiveDate) -> Self {
        Self { start, end: None }
    }

    /// Start of the window (inclusive).
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// End of the window (inclusive), if bounded.
    #[must_use]
    pub const fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Whether `date` falls inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && self.end.is_none_or(|end| date <= end)
    }
}

/// Inclusive year window for World-Bank-style annual fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    /// Build a year range `[start, end]`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `end` precedes `start`.
    pub fn try_new(start: i32, end: i32) -> Result<Self, OikosError> {
        if end < start {
            return Err(OikosError::InvalidArg(format!(
                "year range end {end} precedes start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// First year of the window.
    #[must_use]
    pub const fn start(&self) -> i32 {
        self.start
    }

    /// Last year of the window.
    #[must_use]
    pub const fn end(&self) -> i32 {
        self.end
    }

    /// Whether `year` falls inside the window.
    #[must_use]
    pub const fn contains(&self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }
}

/// Stable key identifying a registered source, used for priority
/// configuration on the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceKey(String);

impl SourceKey {
    /// Build a key from a source name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a multi-identifier fetch. A failure for one identifier never
/// aborts the others; the caller can distinguish succeeded entries from
/// failed ones. Both maps are keyed deterministically by identifier, so
/// assembly order (sequential or concurrent) does not affect content.
#[derive(Debug, Default)]
pub struct BatchObservations {
    /// Successfully fetched series, keyed by identifier.
    pub series: BTreeMap<SeriesId, NormalizedSeries>,
    /// Per-identifier failures, keyed by identifier.
    pub failures: BTreeMap<SeriesId, OikosError>,
}

impl BatchObservations {
    /// Whether every requested identifier succeeded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total number of entries (successes plus failures).
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len() + self.failures.len()
    }

    /// Whether the batch carries no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty() && self.failures.is_empty()
    }
}
