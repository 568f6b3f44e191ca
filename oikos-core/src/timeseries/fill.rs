use serde::{Deserialize, Serialize};

use crate::timeseries::table::{Column, MergedTable};

/// Rule governing how gaps in a merged table are populated.
///
/// The default leaves gaps alone: a missing upstream datum stays visible
/// as a missing cell rather than being papered over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillPolicy {
    /// Keep every missing cell missing.
    #[default]
    LeaveMissing,
    /// Each missing cell takes the last present value above it. Leading
    /// missing cells stay missing.
    ForwardFill,
    /// Interior gaps interpolate linearly by row position between the
    /// nearest present neighbors. Leading and trailing gaps stay missing.
    InterpolateLinear,
    /// Keep only rows where every column has a present value.
    DropIncompleteRows,
}

pub(crate) fn apply(table: MergedTable, policy: FillPolicy) -> MergedTable {
    match policy {
        FillPolicy::LeaveMissing => table,
        FillPolicy::ForwardFill => map_cells(table, forward_fill),
        FillPolicy::InterpolateLinear => map_cells(table, interpolate_linear),
        FillPolicy::DropIncompleteRows => drop_incomplete(table),
    }
}

fn map_cells(table: MergedTable, f: fn(&mut Vec<Option<f64>>)) -> MergedTable {
    let (index, columns) = table.into_parts();
    let columns = columns
        .into_iter()
        .map(|c| {
            let name = c.name().to_string();
            let mut values = c.values().to_vec();
            f(&mut values);
            Column::new(name, values)
        })
        .collect();
    MergedTable::from_parts_unchecked(index, columns)
}

fn forward_fill(values: &mut Vec<Option<f64>>) {
    let mut last: Option<f64> = None;
    for cell in values.iter_mut() {
        match *cell {
            Some(v) => last = Some(v),
            None => *cell = last,
        }
    }
}

fn interpolate_linear(values: &mut Vec<Option<f64>>) {
    let known: Vec<usize> = (0..values.len()).filter(|&i| values[i].is_some()).collect();
    for pair in known.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if hi - lo < 2 {
            continue;
        }
        let (a, b) = (values[lo].unwrap_or_default(), values[hi].unwrap_or_default());
        let span = (hi - lo) as f64;
        for t in lo + 1..hi {
            let w = (t - lo) as f64 / span;
            values[t] = Some(a + (b - a) * w);
        }
    }
}

fn drop_incomplete(table: MergedTable) -> MergedTable {
    let (index, columns) = table.into_parts();
    let keep: Vec<usize> = (0..index.len())
        .filter(|&row| columns.iter().all(|c| c.values()[row].is_some()))
        .collect();

    let new_index = keep.iter().map(|&row| index[row]).collect();
    let new_columns = columns
        .into_iter()
        .map(|c| {
            let values = keep.iter().map(|&row| c.values()[row]).collect();
            Column::new(c.name().to_string(), values)
        })
        .collect();
    MergedTable::from_parts_unchecked(new_index, new_columns)
}
