use std::collections::BTreeMap;

use chrono::NaiveDate;
use oikos_core::{FillPolicy, MergedTable, OikosError, SeriesId, SeriesRequest, merge};

use crate::Oikos;

/// Builder to fetch several identifiers and merge them into one table.
#[derive(Debug)]
pub struct TableBuilder<'a> {
    oikos: &'a Oikos,
    ids: Vec<SeriesId>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    fill: FillPolicy,
}

/// Outcome of a table build: the merged table over every series that
/// succeeded, plus the per-identifier failures that did not.
#[derive(Debug)]
pub struct TableReport {
    /// Merged table over the successful series. Empty when nothing
    /// succeeded.
    pub table: MergedTable,
    /// Per-identifier failures, keyed by identifier.
    pub failures: BTreeMap<SeriesId, OikosError>,
}

impl TableReport {
    /// Whether every requested identifier contributed a column.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl<'a> TableBuilder<'a> {
    pub(crate) const fn new(oikos: &'a Oikos) -> Self {
        Self {
            oikos,
            ids: Vec::new(),
            start: None,
            end: None,
            fill: FillPolicy::LeaveMissing,
        }
    }

    /// Replace the identifier list.
    ///
    /// # Errors
    /// Returns `InvalidArg` on duplicate identifiers; two columns with
    /// the same name cannot coexist in one table.
    pub fn series(mut self, ids: &[SeriesId]) -> Result<Self, OikosError> {
        let mut seen: Vec<&SeriesId> = Vec::new();
        for id in ids {
            if seen.contains(&id) {
                return Err(OikosError::InvalidArg(format!(
                    "duplicate series identifier {id} in table request"
                )));
            }
            seen.push(id);
        }
        self.ids = ids.to_vec();
        Ok(self)
    }

    /// Append a single identifier.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the identifier is already listed.
    pub fn add_series(mut self, id: SeriesId) -> Result<Self, OikosError> {
        if self.ids.contains(&id) {
            return Err(OikosError::InvalidArg(format!(
                "duplicate series identifier {id} in table request"
            )));
        }
        self.ids.push(id);
        Ok(self)
    }

    /// Set the start of the fetch window (inclusive, required).
    #[must_use]
    pub const fn start(mut self, start: NaiveDate) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end of the fetch window (inclusive, optional).
    #[must_use]
    pub const fn end(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    /// Select the gap-filling policy applied after alignment.
    #[must_use]
    pub const fn fill_policy(mut self, policy: FillPolicy) -> Self {
        self.fill = policy;
        self
    }

    /// Fetch the batch and merge the successes into one table.
    ///
    /// Behavior and trade-offs:
    /// - Partial failure does not abort: failed identifiers are reported
    ///   in [`TableReport::failures`] while the rest form the table.
    /// - The axis is the sorted union of the successful series' dates;
    ///   the fill policy resolves (or keeps) the gaps.
    ///
    /// # Errors
    /// - `InvalidArg` when no identifiers were listed or no start date
    ///   was set.
    /// - `Data` if the fetched series cannot be merged (duplicate column
    ///   names).
    pub async fn run(self) -> Result<TableReport, OikosError> {
        if self.ids.is_empty() {
            return Err(OikosError::InvalidArg(
                "no series identifiers specified for table".into(),
            ));
        }
        let Some(start) = self.start else {
            return Err(OikosError::InvalidArg(
                "a start date is required for table fetches".into(),
            ));
        };
        let req = SeriesRequest::try_new(start, self.end)?;

        let batch = self.oikos.series_batch(&self.ids, &req).await;
        let table = merge(batch.series.into_values(), self.fill)?;
        Ok(TableReport {
            table,
            failures: batch.failures,
        })
    }
}

impl Oikos {
    /// Start building a multi-series merged table.
    #[must_use]
    pub const fn table(&self) -> TableBuilder<'_> {
        TableBuilder::new(self)
    }
}
