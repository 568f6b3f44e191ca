use chrono::NaiveDate;
use serde::Serialize;

use crate::OikosError;
use crate::timeseries::fill::FillPolicy;

/// One named column of a merged table. Cell count always equals the owning
/// table's axis length; `None` cells are missing data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    name: String,
    values: Vec<Option<f64>>,
}

impl Column {
    pub(crate) fn new(name: String, values: Vec<Option<f64>>) -> Self {
        Self { name, values }
    }

    /// The column name (series identifier, plus region suffix when present).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cells, aligned with the table's date axis.
    #[must_use]
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }
}

/// A date-indexed table with one named column per contributed series.
///
/// Invariants:
/// - the date axis is strictly increasing;
/// - every column has exactly `index.len()` cells;
/// - column names are unique.
///
/// Constructed through [`crate::timeseries::merge::merge`] or
/// [`MergedTable::from_parts`]; both enforce the invariants, so holding a
/// `MergedTable` is proof they hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedTable {
    index: Vec<NaiveDate>,
    columns: Vec<Column>,
}

impl MergedTable {
    /// A table with no rows and no columns.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            index: Vec::new(),
            columns: Vec::new(),
        }
    }

    /// Assemble a table from a date axis and named columns, validating the
    /// table invariants.
    ///
    /// # Errors
    /// - `Data` if the axis is not strictly increasing.
    /// - `Data` if any column's cell count differs from the axis length.
    /// - `Data` on duplicate column names.
    pub fn from_parts(
        index: Vec<NaiveDate>,
        columns: Vec<(String, Vec<Option<f64>>)>,
    ) -> Result<Self, OikosError> {
        for pair in index.windows(2) {
            if pair[1] <= pair[0] {
                return Err(OikosError::Data(format!(
                    "table axis must be strictly increasing, got {} before {}",
                    pair[0], pair[1]
                )));
            }
        }
        let mut out: Vec<Column> = Vec::with_capacity(columns.len());
        for (name, values) in columns {
            if values.len() != index.len() {
                return Err(OikosError::Data(format!(
                    "column {name} has {} cells for a {}-row axis",
                    values.len(),
                    index.len()
                )));
            }
            if out.iter().any(|c| c.name == name) {
                return Err(OikosError::Data(format!("duplicate column name: {name}")));
            }
            out.push(Column::new(name, values));
        }
        Ok(Self {
            index,
            columns: out,
        })
    }

    /// The date axis, sorted ascending.
    #[must_use]
    pub fn index(&self) -> &[NaiveDate] {
        &self.index
    }

    /// All columns in name order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.index.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The cell for `column` at `date`.
    ///
    /// Outer `None` means the row or column does not exist; `Some(None)`
    /// means the cell exists but its datum is missing.
    #[must_use]
    pub fn cell(&self, column: &str, date: NaiveDate) -> Option<Option<f64>> {
        let row = self.index.binary_search(&date).ok()?;
        self.column(column).map(|c| c.values[row])
    }

    /// Copy of the table with one extra column appended, typically the
    /// output of a transform over an existing column.
    ///
    /// # Errors
    /// Same invariant violations as [`MergedTable::from_parts`].
    pub fn with_column(
        &self,
        name: impl Into<String>,
        values: Vec<Option<f64>>,
    ) -> Result<Self, OikosError> {
        let mut columns: Vec<(String, Vec<Option<f64>>)> = self
            .columns
            .iter()
            .map(|c| (c.name.clone(), c.values.clone()))
            .collect();
        columns.push((name.into(), values));
        Self::from_parts(self.index.clone(), columns)
    }

    /// Apply a gap-filling policy, consuming the table.
    #[must_use]
    pub fn filled(self, policy: FillPolicy) -> Self {
        crate::timeseries::fill::apply(self, policy)
    }

    pub(crate) fn into_parts(self) -> (Vec<NaiveDate>, Vec<Column>) {
        (self.index, self.columns)
    }

    pub(crate) fn from_parts_unchecked(index: Vec<NaiveDate>, columns: Vec<Column>) -> Self {
        Self { index, columns }
    }
}
