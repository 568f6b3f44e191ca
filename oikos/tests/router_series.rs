mod helpers;

use std::sync::Arc;
use std::time::Duration;

use helpers::{TestSource, m_series, month, sid};
use oikos::{Oikos, OikosError, OikosSource, SeriesRequest};

fn req() -> SeriesRequest {
    SeriesRequest::from_start(month(1))
}

#[tokio::test]
async fn first_healthy_source_in_priority_order_wins() {
    let a = Arc::new(TestSource::serving("source-a", |_, _| {
        Ok(m_series("GDP", &[(1, Some(1.0))]))
    }));
    let b = Arc::new(TestSource::serving("source-b", |_, _| {
        Ok(m_series("GDP", &[(1, Some(2.0))]))
    }));

    let oikos = Oikos::builder()
        .with_source(a.clone())
        .with_source(b.clone())
        .build()
        .unwrap();
    let series = oikos.series(&sid("GDP"), &req()).await.unwrap();
    assert_eq!(series.observations()[0].value, Some(1.0));

    // Preferring b reverses the outcome without re-registering anything.
    let oikos = Oikos::builder()
        .with_source(a)
        .with_source(b.clone())
        .prefer_sources(&[b.key()])
        .build()
        .unwrap();
    let series = oikos.series(&sid("GDP"), &req()).await.unwrap();
    assert_eq!(series.observations()[0].value, Some(2.0));
}

#[tokio::test]
async fn a_failing_source_falls_through_to_the_next() {
    let broken = Arc::new(TestSource::serving("broken", |_, _| {
        Err(OikosError::upstream("broken", "503"))
    }));
    let healthy = Arc::new(TestSource::serving("healthy", |_, _| {
        Ok(m_series("GDP", &[(1, Some(1.0))]))
    }));

    let oikos = Oikos::builder()
        .with_source(broken)
        .with_source(healthy)
        .build()
        .unwrap();
    let series = oikos.series(&sid("GDP"), &req()).await.unwrap();
    assert_eq!(series.observations()[0].value, Some(1.0));
}

#[tokio::test]
async fn an_identifier_rejected_by_one_source_may_be_served_by_another() {
    let narrow = Arc::new(TestSource::serving("narrow", |id, _| {
        Err(OikosError::invalid_identifier(id.as_str()))
    }));
    let wide = Arc::new(TestSource::serving("wide", |_, _| {
        Ok(m_series("OBSCURE", &[(1, Some(7.0))]))
    }));

    let oikos = Oikos::builder()
        .with_source(narrow)
        .with_source(wide)
        .build()
        .unwrap();
    let series = oikos.series(&sid("OBSCURE"), &req()).await.unwrap();
    assert_eq!(series.observations()[0].value, Some(7.0));
}

#[tokio::test]
async fn unanimous_rejection_collapses_to_invalid_identifier() {
    let a = Arc::new(TestSource::serving("a", |id, _| {
        Err(OikosError::invalid_identifier(id.as_str()))
    }));
    let b = Arc::new(TestSource::serving("b", |id, _| {
        Err(OikosError::invalid_identifier(id.as_str()))
    }));

    let oikos = Oikos::builder().with_source(a).with_source(b).build().unwrap();
    let err = oikos.series(&sid("BAD_ID"), &req()).await.unwrap_err();
    match err {
        OikosError::InvalidIdentifier { id } => assert_eq!(id, "BAD_ID"),
        other => panic!("expected InvalidIdentifier, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_capability_maps_to_unsupported() {
    // A source serving only regional data cannot answer a series fetch.
    let regional_only = Arc::new(TestSource {
        name: "regional-only",
        regional_fn: Some(Arc::new(|_, _, _| Ok(vec![]))),
        ..TestSource::default()
    });

    let oikos = Oikos::builder().with_source(regional_only).build().unwrap();
    let err = oikos.series(&sid("GDP"), &req()).await.unwrap_err();
    assert!(matches!(err, OikosError::Unsupported { .. }));
}

#[tokio::test]
async fn a_slow_source_times_out_and_the_next_serves() {
    let slow = Arc::new(TestSource {
        delay_ms: 200,
        ..TestSource::serving("slow", |_, _| Ok(m_series("GDP", &[(1, Some(1.0))])))
    });
    let fast = Arc::new(TestSource::serving("fast", |_, _| {
        Ok(m_series("GDP", &[(1, Some(2.0))]))
    }));

    let oikos = Oikos::builder()
        .with_source(slow)
        .with_source(fast)
        .source_timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let series = oikos.series(&sid("GDP"), &req()).await.unwrap();
    assert_eq!(series.observations()[0].value, Some(2.0));
}

#[tokio::test]
async fn a_lone_timeout_surfaces_as_source_timeout() {
    let slow = Arc::new(TestSource {
        delay_ms: 200,
        ..TestSource::serving("slow", |_, _| Ok(m_series("GDP", &[(1, Some(1.0))])))
    });

    let oikos = Oikos::builder()
        .with_source(slow)
        .source_timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let err = oikos.series(&sid("GDP"), &req()).await.unwrap_err();
    assert!(matches!(err, OikosError::SourceTimeout { .. }));
    assert!(err.is_retryable());
}

#[test]
fn an_orchestrator_without_sources_does_not_build() {
    let err = Oikos::builder().build().unwrap_err();
    assert!(matches!(err, OikosError::InvalidArg(_)));
}
