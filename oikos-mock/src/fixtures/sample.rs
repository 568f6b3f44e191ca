use chrono::NaiveDate;
use oikos_core::{Frequency, NormalizedSeries, Observation, SeriesId, SeriesMeta};

const SAMPLE_CSV: &str = include_str!("../../data/sample_economic_indicators.csv");

const COLUMNS: [(&str, &str); 5] = [
    ("gdp_billions", "Billions of Dollars"),
    ("unemployment_rate", "Percent"),
    ("inflation_rate", "Percent"),
    ("interest_rate", "Percent"),
    ("consumer_confidence", "Index"),
];

/// Parse the bundled monthly sample CSV into one normalized series per
/// indicator column.
///
/// Purely illustrative fixture data; nothing in the core layer produces
/// or consumes this file.
#[must_use]
pub fn sample_series() -> Vec<NormalizedSeries> {
    let mut reader = csv::Reader::from_reader(SAMPLE_CSV.as_bytes());
    let mut per_column: Vec<Vec<Observation>> = vec![Vec::new(); COLUMNS.len()];

    for record in reader.records() {
        let record = record.expect("bundled sample CSV is well-formed");
        let date = NaiveDate::parse_from_str(&record[0], "%Y-%m-%d")
            .expect("bundled sample CSV dates are ISO formatted");
        for (i, cells) in per_column.iter_mut().enumerate() {
            let value = record[i + 1]
                .parse::<f64>()
                .expect("bundled sample CSV values are numeric");
            cells.push(Observation::new(date, Some(value)));
        }
    }

    COLUMNS
        .iter()
        .zip(per_column)
        .map(|(&(name, unit), observations)| {
            NormalizedSeries::new(
                SeriesId::new(name).expect("bundled column names are valid identifiers"),
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
