use chrono::{Months, NaiveDate};
use oikos_core::{Frequency, NormalizedSeries, Observation, SeriesId, SeriesMeta};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate a deterministic set of synthetic monthly indicators.
///
/// Four random-walk series (gdp, unemployment_rate, inflation_rate,
/// interest_rate) starting 2015-01-01. The same seed always yields the
/// same data, so snapshots and doc examples stay stable.
#[must_use]
pub fn synthetic_monthly(n_periods: usize, seed: u64) -> Vec<NormalizedSeries> {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = NaiveDate::from_ymd_opt(2015, 1, 1).expect("valid fixture start date");
    let dates: Vec<NaiveDate> = (0..n_periods)
        .map(|i| start + Months::new(i as u32))
        .collect();

    let mut gdp = Vec::with_capacity(n_periods);
    let mut unemployment = Vec::with_capacity(n_periods);
    let mut inflation = Vec::with_capacity(n_periods);
    let mut interest = Vec::with_capacity(n_periods);

    let mut gdp_level: f64 = 20_000.0;
    let mut unemployment_level: f64 = 5.0;
    let mut interest_level: f64 = 2.0;
    for &date in &dates {
        gdp_level *= 1.0 + rng.random_range(-0.005..0.025);
        unemployment_level = (unemployment_level + rng.random_range(-0.3..0.3)).clamp(2.0, 15.0);
        interest_level = (interest_level + rng.random_range(-0.25..0.25)).max(0.0);
        let inflation_level = 2.0 + rng.random_range(-0.9..0.9);

        gdp.push(Observation::new(date, Some(gdp_level)));
        unemployment.push(Observation::new(date, Some(unemployment_level)));
        inflation.push(Observation::new(date, Some(inflation_level)));
        interest.push(Observation::new(date, Some(interest_level)));
    }

    let series = [
        ("gdp", "Billions of Dollars", gdp),
        ("unemployment_rate", "Percent", unemployment),
        ("inflation_rate", "Percent", inflation),
        ("interest_rate", "Percent", interest),
    ];
    series
        .into_iter()
        .map(|(name, unit, observations)| {
            NormalizedSeries::new(
                SeriesId::new(name).expect("fixture names are valid identifiers"),
                SeriesMeta {
                    title: None,
                    unit: Some(unit.to_string()),
                    frequency: Some(Frequency::Monthly),
                    seasonally_adjusted: None,
                },
                observations,
            )
        })
        .collect()
}
