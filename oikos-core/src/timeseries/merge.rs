use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::OikosError;
use crate::timeseries::fill::FillPolicy;
use crate::timeseries::table::MergedTable;
use crate::types::NormalizedSeries;

/// Merge normalized series into a single date-indexed table.
///
/// - The output axis is the sorted union of all input dates.
/// - A series lacking a date present in another series contributes a
///   missing cell there, unless `policy` resolves it afterwards.
/// - Columns are ordered by name, so the result is independent of input
///   order (merging `{A, B}` equals merging `{B, A}`).
/// - A single input series reproduces its own axis exactly.
///
/// # Errors
/// Returns `Err(OikosError::Data)` when two inputs map to the same column
/// name; silently overwriting one of them would hide data, so the
/// collision is surfaced instead.
///
/// ```
/// use chrono::NaiveDate;
/// use oikos_core::{FillPolicy, NormalizedSeries, Observation, SeriesId, SeriesMeta, merge};
///
/// let d = |m| NaiveDate::from_ymd_opt(2020, m, 1).unwrap();
/// let gdp = NormalizedSeries::new(
///     SeriesId::new("GDP").unwrap(),
///     SeriesMeta::default(),
///     vec![Observation::new(d(1), Some(21.5)), Observation::new(d(3), Some(21.7))],
/// );
/// let unrate = NormalizedSeries::new(
///     SeriesId::new("UNRATE").unwrap(),
///     SeriesMeta::default(),
///     vec![
///         Observation::new(d(1), Some(3.6)),
///         Observation::new(d(2), Some(3.5)),
///         Observation::new(d(3), Some(4.4)),
///     ],
/// );
///
/// let table = merge(vec![gdp, unrate], FillPolicy::LeaveMissing).unwrap();
/// assert_eq!(table.n_rows(), 3);
/// assert_eq!(table.cell("GDP", d(2)), Some(None));
/// assert_eq!(table.cell("UNRATE", d(2)), Some(Some(3.5)));
/// ```
pub fn merge<I>(series: I, policy: FillPolicy) -> Result<MergedTable, OikosError>
where
    I: IntoIterator<Item = NormalizedSeries>,
{
    let mut named: BTreeMap<String, BTreeMap<NaiveDate, Option<f64>>> = BTreeMap::new();
    let mut axis: BTreeSet<NaiveDate> = BTreeSet::new();

    for s in series {
        let name = s.column_name();
        if named.contains_key(&name) {
            return Err(OikosError::Data(format!(
                "two series map to the same column name: {name}"
            )));
        }
        let mut cells: BTreeMap<NaiveDate, Option<f64>> = BTreeMap::new();
        for obs in s.observations() {
            axis.insert(obs.date);
            cells.insert(obs.date, obs.value);
        }
        named.insert(name, cells);
    }

    let index: Vec<NaiveDate> = axis.into_iter().collect();
    let columns: Vec<(String, Vec<Option<f64>>)> = named
        .into_iter()
        .map(|(name, cells)| {
            let values = index
                .iter()
                .map(|d| cells.get(d).copied().flatten())
                .collect();
            (name, values)
        })
        .collect();

    let table = MergedTable::from_parts(index, columns)?;
    Ok(table.filled(policy))
}
