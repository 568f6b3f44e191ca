use chrono::NaiveDate;

use crate::types::Frequency;

/// Infer a calendar resolution from the spacing of observation dates.
///
/// Takes the most frequent positive day-delta between adjacent dates
/// (ties resolve to the smaller delta) and buckets it into a calendar
/// frequency, tolerating month-length and leap-year wobble.
///
/// Returns `None` when fewer than two distinct dates are present or the
/// dominant spacing fits no calendar bucket.
///
/// ```
/// use chrono::NaiveDate;
/// use oikos_core::timeseries::infer::infer_frequency;
/// use oikos_core::Frequency;
///
/// let d = |m| NaiveDate::from_ymd_opt(2022, m, 1).unwrap();
/// let dates = vec![d(1), d(2), d(3), d(4)];
/// assert_eq!(infer_frequency(&dates), Some(Frequency::Monthly));
/// ```
#[must_use]
pub fn infer_frequency(dates: &[NaiveDate]) -> Option<Frequency> {
    let mut sorted: Vec<NaiveDate> = dates.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    if sorted.len() < 2 {
        return None;
    }

    let mut deltas: Vec<i64> = sorted
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_days())
        .collect();
    deltas.sort_unstable();

    // Mode of the deltas; on a tie the smaller delta wins because the run
    // below scans in ascending order and requires a strict improvement.
    let mut mode = deltas[0];
    let mut best_run = 0usize;
    let mut i = 0usize;
    while i < deltas.len() {
        let j = deltas[i..].iter().take_while(|&&d| d == deltas[i]).count();
        if j > best_run {
            best_run = j;
            mode = deltas[i];
        }
        i += j;
    }

    bucket(mode)
}

const fn bucket(days: i64) -> Option<Frequency> {
    match days {
        1 => Some(Frequency::Daily),
        7 => Some(Frequency::Weekly),
        28..=31 => Some(Frequency::Monthly),
        89..=92 => Some(Frequency::Quarterly),
        360..=366 => Some(Frequency::Annual),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn quarterly_spacing_is_recognized() {
        let dates = vec![d(2020, 1, 1), d(2020, 4, 1), d(2020, 7, 1), d(2020, 10, 1)];
        assert_eq!(infer_frequency(&dates), Some(Frequency::Quarterly));
    }

    #[test]
    fn annual_spacing_tolerates_leap_years() {
        let dates = vec![d(2019, 1, 1), d(2020, 1, 1), d(2021, 1, 1)];
        assert_eq!(infer_frequency(&dates), Some(Frequency::Annual));
    }

    #[test]
    fn single_date_has_no_frequency() {
        assert_eq!(infer_frequency(&[d(2020, 1, 1)]), None);
    }

    #[test]
    fn irregular_spacing_has_no_frequency() {
        let dates = vec![d(2020, 1, 1), d(2020, 1, 13), d(2020, 2, 26)];
        assert_eq!(infer_frequency(&dates), None);
    }
}
