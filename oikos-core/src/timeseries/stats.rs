use serde::Serialize;

use crate::timeseries::table::MergedTable;

/// Pairwise Pearson correlations between a table's columns.
///
/// Cells are `None` when fewer than two rows have both values present, or
/// when either column has zero variance over the complete pairs; both
/// conditions make the coefficient undefined. This is the numeric input a
/// plotting collaborator renders as a heatmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    labels: Vec<String>,
    values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Column labels, in table order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The full coefficient grid, row-major in label order.
    #[must_use]
    pub fn values(&self) -> &[Vec<Option<f64>>] {
        &self.values
    }

    /// Coefficient for a pair of columns by name.
    #[must_use]
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.labels.iter().position(|l| l == a)?;
        let j = self.labels.iter().position(|l| l == b)?;
        self.values[i][j]
    }
}

/// Compute pairwise Pearson correlations over complete observation pairs.
#[must_use]
pub fn correlation_matrix(table: &MergedTable) -> CorrelationMatrix {
    let labels: Vec<String> = table.columns().iter().map(|c| c.name().to_string()).collect();
    let n = labels.len();
    let mut values = vec![vec![None; n]; n];
    for i in 0..n {
        for j in i..n {
            let r = pearson(
                table.columns()[i].values(),
                table.columns()[j].values(),
            );
            values[i][j] = r;
            values[j][i] = r;
        }
    }
    CorrelationMatrix { labels, values }
}

fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();
    if pairs.len() < 2 {
        return None;
    }
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}

/// Per-column summary statistics over present cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    /// Column name.
    pub name: String,
    /// Number of present cells.
    pub count: usize,
    /// Arithmetic mean, when at least one cell is present.
    pub mean: Option<f64>,
    /// Sample standard deviation, when at least two cells are present.
    pub std_dev: Option<f64>,
    /// Smallest present value.
    pub min: Option<f64>,
    /// Median of present values.
    pub median: Option<f64>,
    /// Largest present value.
    pub max: Option<f64>,
}

/// Describe every column of a table: count, mean, standard deviation,
/// min, median, max — computed over present cells only, so gaps shrink
/// the sample rather than poisoning it.
#[must_use]
pub fn describe(table: &MergedTable) -> Vec<ColumnSummary> {
    table
        .columns()
        .iter()
        .map(|c| {
            let mut present: Vec<f64> = c.values().iter().flatten().copied().collect();
            present.sort_by(f64::total_cmp);
            let count = present.len();
            let mean = if count == 0 {
                None
            } else {
                Some(present.iter().sum::<f64>() / count as f64)
            };
            let std_dev = if count < 2 {
                None
            } else {
                let m = mean.unwrap_or_default();
                let ss: f64 = present.iter().map(|v| (v - m) * (v - m)).sum();
                Some((ss / (count as f64 - 1.0)).sqrt())
            };
            let median = match count {
                0 => None,
                n if n % 2 == 1 => Some(present[n / 2]),
                n => Some((present[n / 2 - 1] + present[n / 2]) / 2.0),
            };
            ColumnSummary {
                name: c.name().to_string(),
                count,
                mean,
                std_dev,
                min: present.first().copied(),
                median,
                max: present.last().copied(),
            }
        })
        .collect()
}
