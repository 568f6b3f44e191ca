use crate::OikosError;

/// Period-over-period growth rate: `(v[t] / v[t-periods]) - 1`.
///
/// The first `periods` cells are missing by construction. A cell is also
/// missing when either operand is missing or the base value is zero;
/// missing interior values propagate, they never panic.
///
/// # Errors
/// Returns `InvalidArg` when `periods == 0`; a zero shift would compare
/// every value against itself and is rejected explicitly rather than
/// producing a column of zeros.
///
/// ```
/// use oikos_core::growth_rate;
///
/// let col = vec![Some(100.0), Some(110.0), None, Some(121.0)];
/// let g = growth_rate(&col, 1).unwrap();
/// assert_eq!(g.len(), col.len());
/// assert_eq!(g[0], None);
/// assert!((g[1].unwrap() - 0.10).abs() < 1e-12);
/// assert_eq!(g[2], None);
/// assert_eq!(g[3], None); // base at t-1 is missing
/// ```
pub fn growth_rate(values: &[Option<f64>], periods: usize) -> Result<Vec<Option<f64>>, OikosError> {
    if periods == 0 {
        return Err(OikosError::InvalidArg(
            "growth rate requires periods >= 1".into(),
        ));
    }
    let out = (0..values.len())
        .map(|t| {
            if t < periods {
                return None;
            }
            match (values[t], values[t - periods]) {
                (Some(cur), Some(base)) if base != 0.0 => Some(cur / base - 1.0),
                _ => None,
            }
        })
        .collect();
    Ok(out)
}

/// Natural-log returns: `ln(v[t] / v[t-1])`.
///
/// The first cell is missing; so is any cell whose operands are missing or
/// non-positive (the logarithm is undefined there, and undefined means
/// missing, not a panic).
#[must_use]
pub fn log_returns(values: &[Option<f64>]) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|t| {
            if t == 0 {
                return None;
            }
            match (values[t], values[t - 1]) {
                (Some(cur), Some(prev)) if cur > 0.0 && prev > 0.0 => Some((cur / prev).ln()),
                _ => None,
            }
        })
        .collect()
}

/// Trailing moving average over `window` cells.
///
/// The first `window - 1` cells are missing by construction. A cell is
/// also missing when any value inside its window is missing; partial
/// windows are not averaged, because a mean over fewer points would
/// silently change meaning.
///
/// # Errors
/// Returns `InvalidArg` when `window == 0`.
pub fn moving_average(
    values: &[Option<f64>],
    window: usize,
) -> Result<Vec<Option<f64>>, OikosError> {
    if window == 0 {
        return Err(OikosError::InvalidArg(
            "moving average requires window >= 1".into(),
        ));
    }
    let out = (0..values.len())
        .map(|t| {
            if t + 1 < window {
                return None;
            }
            let slice = &values[t + 1 - window..=t];
            let mut sum = 0.0;
            for cell in slice {
                sum += (*cell)?;
            }
            Some(sum / window as f64)
        })
        .collect();
    Ok(out)
}
