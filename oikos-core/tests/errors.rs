use oikos_core::OikosError;

#[test]
fn only_transport_failures_and_timeouts_are_retryable() {
    assert!(OikosError::upstream("oikos-fred", "connection reset").is_retryable());
    assert!(OikosError::source_timeout("oikos-fred", "observations").is_retryable());

    assert!(!OikosError::invalid_identifier("BAD_ID").is_retryable());
    assert!(!OikosError::auth_required("oikos-fred").is_retryable());
    assert!(!OikosError::malformed("oikos-worldbank", "not json").is_retryable());
    assert!(!OikosError::unsupported("observations").is_retryable());
    assert!(!OikosError::InvalidArg("periods must be >= 1".into()).is_retryable());
    assert!(!OikosError::Data("duplicate column".into()).is_retryable());
}

#[test]
fn invalid_identifier_carries_the_offending_id() {
    match OikosError::invalid_identifier("BAD_ID") {
        OikosError::InvalidIdentifier { id } => assert_eq!(id, "BAD_ID"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn aggregate_failures_preserve_individual_errors() {
    let e = OikosError::AllSourcesFailed(vec![
        OikosError::invalid_identifier("X"),
        OikosError::upstream("oikos-fred", "503"),
    ]);
    match e {
        OikosError::AllSourcesFailed(errors) => {
            assert_eq!(errors.len(), 2);
            assert!(errors.iter().any(OikosError::is_retryable));
        }
        other => panic!("unexpected: {other:?}"),
    }
}
