use chrono::NaiveDate;
use httpmock::prelude::*;
use oikos_core::source::ObservationsProvider;
use oikos_core::{SeriesId, SeriesRequest};
use oikos_fred::FredConnector;

// All pages are fetched and concatenated before the call returns; the
// caller sees one logical sequence, never a partial yield.
#[tokio::test]
async fn offset_pages_concatenate_into_one_sequence() {
    let server = MockServer::start();

    let first = server.mock(|when, then| {
        when.method(GET)
            .path("/series/observations")
            .query_param("offset", "0")
            .query_param("limit", "2");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "count": 3,
                "offset": 0,
                "observations": [
                    {"date": "2021-01-01", "value": "1.0"},
                    {"date": "2021-02-01", "value": "2.0"}
                ]
            }));
    });
    let second = server.mock(|when, then| {
        when.method(GET)
            .path("/series/observations")
            .query_param("offset", "2")
            .query_param("limit", "2");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "count": 3,
                "offset": 2,
                "observations": [
                    {"date": "2021-03-01", "value": "3.0"}
                ]
            }));
    });

    let fred = FredConnector::builder()
        .api_key("test-key")
        .base_url(server.base_url())
        .page_limit(2)
        .build()
        .expect("connector builds");

    let id = SeriesId::new("PCE").unwrap();
    let req = SeriesRequest::from_start(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
    let series = fred.observations(&id, &req).await.unwrap();

    first.assert();
    second.assert();
    assert_eq!(series.len(), 3);
    let values: Vec<Option<f64>> = series.observations().iter().map(|o| o.value).collect();
    assert_eq!(values, vec![Some(1.0), Some(2.0), Some(3.0)]);
}

#[tokio::test]
async fn empty_page_terminates_pagination() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/series/observations");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                // An upstream overcounting its total must not loop forever.
                "count": 10,
                "offset": 0,
                "observations": []
            }));
    });

    let fred = FredConnector::builder()
        .api_key("test-key")
        .base_url(server.base_url())
        .build()
        .expect("connector builds");

    let id = SeriesId::new("GDP").unwrap();
    let req = SeriesRequest::from_start(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
    let series = fred.observations(&id, &req).await.unwrap();

    mock.assert();
    assert!(series.is_empty());
}
