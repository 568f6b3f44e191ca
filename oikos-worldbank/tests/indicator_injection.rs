use chrono::NaiveDate;
use httpmock::prelude::*;
use oikos_core::source::RegionalObservationsProvider;
use oikos_core::{Frequency, RegionCode, SeriesId, YearRange};
use oikos_worldbank::WorldBankConnector;

fn jan1(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).unwrap()
}

fn connector(server: &MockServer) -> WorldBankConnector {
    WorldBankConnector::builder()
        .base_url(server.base_url())
        .build()
        .expect("connector builds")
}

fn row(country: &str, year: i32, value: Option<f64>) -> serde_json::Value {
    serde_json::json!({
        "indicator": {"id": "NY.GDP.MKTP.CD", "value": "GDP (current US$)"},
        "country": {"id": country, "value": country},
        "countryiso3code": country,
        "date": year.to_string(),
        "value": value,
        "unit": "",
        "obs_status": "",
        "decimal": 0
    })
}

// Two regions over three years: exactly six observations, one series per
// (indicator, region) pair, re-sorted ascending from the upstream's
// newest-first ordering.
#[tokio::test]
async fn two_regions_three_years_yield_six_observations() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/country/USA;JPN/indicator/NY.GDP.MKTP.CD")
            .query_param("format", "json")
            .query_param("date", "2010:2012");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!([
                {"page": 1, "pages": 1, "per_page": 1000, "total": 6},
                [
                    row("USA", 2012, Some(1.6254e13)),
                    row("USA", 2011, Some(1.5600e13)),
                    row("USA", 2010, Some(1.4964e13)),
                    row("JPN", 2012, Some(6.2032e12)),
                    row("JPN", 2011, Some(6.1574e12)),
                    row("JPN", 2010, Some(5.7591e12))
                ]
            ]));
    });

    let wb = connector(&server);
    let indicator = SeriesId::new("NY.GDP.MKTP.CD").unwrap();
    let regions = vec![
        RegionCode::new("USA").unwrap(),
        RegionCode::new("JPN").unwrap(),
    ];
    let years = YearRange::try_new(2010, 2012).unwrap();
    let series = wb
        .regional_observations(&indicator, &regions, &years)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(series.len(), 2);
    assert_eq!(series.iter().map(oikos_core::NormalizedSeries::len).sum::<usize>(), 6);

    let usa = &series[0];
    assert_eq!(usa.region().map(RegionCode::as_str), Some("USA"));
    assert_eq!(usa.column_name(), "NY.GDP.MKTP.CD.USA");
    assert_eq!(usa.meta().frequency, Some(Frequency::Annual));
    assert_eq!(usa.meta().title.as_deref(), Some("GDP (current US$)"));
    let dates: Vec<NaiveDate> = usa.observations().iter().map(|o| o.date).collect();
    assert_eq!(dates, vec![jan1(2010), jan1(2011), jan1(2012)]);
}

// A null value means the upstream has no datum for that year: the year is
// absent from the series, never interpolated.
#[tokio::test]
async fn null_years_are_absent_not_interpolated() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/country/JPN/indicator/NY.GDP.MKTP.CD");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!([
                {"page": 1, "pages": 1, "per_page": 1000, "total": 3},
                [
                    row("JPN", 2012, Some(6.2032e12)),
                    row("JPN", 2011, None),
                    row("JPN", 2010, Some(5.7591e12))
                ]
            ]));
    });

    let wb = connector(&server);
    let indicator = SeriesId::new("NY.GDP.MKTP.CD").unwrap();
    let regions = vec![RegionCode::new("JPN").unwrap()];
    let years = YearRange::try_new(2010, 2012).unwrap();
    let series = wb
        .regional_observations(&indicator, &regions, &years)
        .await
        .unwrap();

    let jpn = &series[0];
    assert_eq!(jpn.len(), 2);
    let dates: Vec<NaiveDate> = jpn.observations().iter().map(|o| o.date).collect();
    assert_eq!(dates, vec![jan1(2010), jan1(2012)]);
}

// A region the upstream returned nothing for still gets its (empty)
// series, so the output shape stays one series per requested region.
#[tokio::test]
async fn uncovered_regions_yield_empty_series() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/country/USA;XKX/indicator/SP.POP.TOTL");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!([
                {"page": 1, "pages": 1, "per_page": 1000, "total": 1},
                [
                    {"indicator": {"id": "SP.POP.TOTL", "value": "Population, total"},
                     "country": {"id": "US", "value": "United States"},
                     "countryiso3code": "USA",
                     "date": "2020",
                     "value": 331501080.0}
                ]
            ]));
    });

    let wb = connector(&server);
    let indicator = SeriesId::new("SP.POP.TOTL").unwrap();
    let regions = vec![
        RegionCode::new("USA").unwrap(),
        RegionCode::new("XKX").unwrap(),
    ];
    let years = YearRange::try_new(2020, 2020).unwrap();
    let series = wb
        .regional_observations(&indicator, &regions, &years)
        .await
        .unwrap();

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].len(), 1);
    assert!(series[1].is_empty());
    assert_eq!(series[1].region().map(RegionCode::as_str), Some("XKX"));
}

#[tokio::test]
async fn empty_region_list_is_rejected_without_a_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(serde_json::json!([]));
    });

    let wb = connector(&server);
    let indicator = SeriesId::new("SP.POP.TOTL").unwrap();
    let years = YearRange::try_new(2020, 2020).unwrap();
    let err = wb
        .regional_observations(&indicator, &[], &years)
        .await
        .unwrap_err();
    assert!(matches!(err, oikos_core::OikosError::InvalidArg(_)));
    mock.assert_hits(0);
}
