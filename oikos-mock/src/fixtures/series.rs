use chrono::NaiveDate;
use oikos_core::{Frequency, NormalizedSeries, Observation, SeriesId, SeriesMeta};

pub fn by_id(s: &str) -> Option<NormalizedSeries> {
    match s {
        // GDP deliberately has no February 2020 datum, so alignment and
        // fill-policy behavior is visible out of the box.
        "GDP" => Some(build(
            "GDP",
            "Gross Domestic Product",
            "Billions of Dollars",
            Frequency::Monthly,
            &[
                ("2020-01-01", Some(21_481.4)),
                ("2020-03-01", Some(21_170.3)),
                ("2020-04-01", Some(19_636.7)),
                ("2020-05-01", Some(19_916.1)),
                ("2020-06-01", Some(20_502.9)),
            ],
        )),
        "UNRATE" => Some(build(
            "UNRATE",
            "Unemployment Rate",
            "Percent",
            Frequency::Monthly,
            &[
                ("2020-01-01", Some(3.6)),
                ("2020-02-01", Some(3.5)),
                ("2020-03-01", Some(4.4)),
                ("2020-04-01", Some(14.8)),
                ("2020-05-01", Some(13.2)),
                ("2020-06-01", Some(11.0)),
            ],
        )),
        "CPIAUCSL" => Some(build(
            "CPIAUCSL",
            "Consumer Price Index for All Urban Consumers",
            "Index 1982-1984=100",
            Frequency::Monthly,
            &[
                ("2020-01-01", Some(258.8)),
                ("2020-02-01", Some(259.2)),
                ("2020-03-01", Some(258.2)),
                ("2020-04-01", Some(256.1)),
                ("2020-05-01", Some(255.9)),
                ("2020-06-01", Some(257.2)),
            ],
        )),
        "FEDFUNDS" => Some(build(
            "FEDFUNDS",
            "Effective Federal Funds Rate",
            "Percent",
            Frequency::Monthly,
            &[
                ("2020-01-01", Some(1.55)),
                ("2020-02-01", Some(1.58)),
                ("2020-03-01", Some(0.65)),
                ("2020-04-01", Some(0.05)),
                ("2020-05-01", Some(0.05)),
                ("2020-06-01", Some(0.08)),
            ],
        )),
        _ => None,
    }
}

fn build(
    id: &str,
    title: &str,
    unit: &str,
    frequency: Frequency,
    rows: &[(&str, Option<f64>)],
) -> NormalizedSeries {
    let observations = rows
        .iter()
        .map(|&(date, value)| {
            Observation::new(
                NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                value,
            )
        })
        .collect();
    NormalizedSeries::new(
        SeriesId::new(id).unwrap(),
        SeriesMeta {
            title: Some(title.to_string()),
            unit: Some(unit.to_string()),
            frequency: Some(frequency),
            seasonally_adjusted: Some(true),
        },
        observations,
    )
}
