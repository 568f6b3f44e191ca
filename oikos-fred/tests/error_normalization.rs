use chrono::NaiveDate;
use httpmock::prelude::*;
use oikos_core::source::ObservationsProvider;
use oikos_core::{OikosError, SeriesId, SeriesRequest};
use oikos_fred::FredConnector;

fn req() -> SeriesRequest {
    SeriesRequest::from_start(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
}

fn connector(server: &MockServer) -> FredConnector {
    FredConnector::builder()
        .api_key("test-key")
        .base_url(server.base_url())
        .build()
        .expect("connector builds")
}

#[tokio::test]
async fn unknown_series_maps_to_invalid_identifier() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/series/observations");
        then.status(400)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "error_code": 400,
                "error_message": "Bad Request. The series does not exist."
            }));
    });

    let fred = connector(&server);
    let id = SeriesId::new("BAD_ID").unwrap();
    let err = fred.observations(&id, &req()).await.unwrap_err();
    match err {
        OikosError::InvalidIdentifier { id } => assert_eq!(id, "BAD_ID"),
        other => panic!("expected InvalidIdentifier, got {other:?}"),
    }
}

#[tokio::test]
async fn rejected_key_maps_to_auth_required() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/series/observations");
        then.status(400)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "error_code": 400,
                "error_message": "Bad Request. The value for variable api_key is not a 32 character alpha-numeric lower-case string."
            }));
    });

    let fred = connector(&server);
    let id = SeriesId::new("GDP").unwrap();
    let err = fred.observations(&id, &req()).await.unwrap_err();
    assert!(matches!(err, OikosError::AuthRequired { .. }));
}

#[tokio::test]
async fn absent_key_fails_before_any_network_call() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/series/observations");
        then.status(200).json_body(serde_json::json!({}));
    });

    let fred = FredConnector::builder()
        .base_url(server.base_url())
        .build()
        .expect("connector builds without a key");

    let id = SeriesId::new("GDP").unwrap();
    let err = fred.observations(&id, &req()).await.unwrap_err();
    assert!(matches!(err, OikosError::AuthRequired { .. }));
    mock.assert_hits(0);
}

#[tokio::test]
async fn server_errors_map_to_upstream_and_are_retryable() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/series/observations");
        then.status(503).body("upstream maintenance");
    });

    let fred = connector(&server);
    let id = SeriesId::new("GDP").unwrap();
    let err = fred.observations(&id, &req()).await.unwrap_err();
    assert!(matches!(err, OikosError::Upstream { .. }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn undecodable_body_maps_to_malformed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/series/observations");
        then.status(200)
            .header("content-type", "text/html")
            .body("<html>maintenance page</html>");
    });

    let fred = connector(&server);
    let id = SeriesId::new("GDP").unwrap();
    let err = fred.observations(&id, &req()).await.unwrap_err();
    assert!(matches!(err, OikosError::Malformed { .. }));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn non_numeric_values_map_to_malformed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/series/observations");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "count": 1,
                "offset": 0,
                "observations": [{"date": "2020-01-01", "value": "n/a"}]
            }));
    });

    let fred = connector(&server);
    let id = SeriesId::new("GDP").unwrap();
    let err = fred.observations(&id, &req()).await.unwrap_err();
    assert!(matches!(err, OikosError::Malformed { .. }));
}
