mod helpers;

use std::sync::Arc;

use chrono::NaiveDate;
use helpers::{TestSource, sid};
use oikos::{Oikos, OikosError, RegionCode, YearRange};
use oikos_mock::MockSource;

fn orchestrator() -> Oikos {
    Oikos::builder()
        .with_source(Arc::new(MockSource::new()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn one_series_per_region_in_request_order() {
    let oikos = orchestrator();
    let regions = vec![
        RegionCode::new("JPN").unwrap(),
        RegionCode::new("USA").unwrap(),
    ];
    let years = YearRange::try_new(2010, 2012).unwrap();
    let series = oikos
        .regional(&sid("NY.GDP.MKTP.CD"), &regions, &years)
        .await
        .unwrap();

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].region().map(RegionCode::as_str), Some("JPN"));
    assert_eq!(series[1].region().map(RegionCode::as_str), Some("USA"));

    // The fixture has no 2011 datum for JPN; the year is absent, not
    // fabricated.
    let jpn_dates: Vec<NaiveDate> = series[0].observations().iter().map(|o| o.date).collect();
    assert_eq!(
        jpn_dates,
        vec![
            NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2012, 1, 1).unwrap(),
        ]
    );
    assert_eq!(series[1].len(), 3);
}

#[tokio::test]
async fn unknown_indicators_map_to_invalid_identifier() {
    let oikos = orchestrator();
    let regions = vec![RegionCode::new("USA").unwrap()];
    let years = YearRange::try_new(2010, 2012).unwrap();
    let err = oikos
        .regional(&sid("NOT.A.CODE"), &regions, &years)
        .await
        .unwrap_err();
    assert!(matches!(err, OikosError::InvalidIdentifier { .. }));
}

#[tokio::test]
async fn sources_without_the_capability_map_to_unsupported() {
    let observations_only = Arc::new(TestSource::serving("obs-only", |id, _| {
        Err(OikosError::invalid_identifier(id.as_str()))
    }));
    let oikos = Oikos::builder().with_source(observations_only).build().unwrap();

    let regions = vec![RegionCode::new("USA").unwrap()];
    let years = YearRange::try_new(2010, 2012).unwrap();
    let err = oikos
        .regional(&sid("NY.GDP.MKTP.CD"), &regions, &years)
        .await
        .unwrap_err();
    assert!(matches!(err, OikosError::Unsupported { .. }));
}
