use oikos_core::OikosError;

/// Collapse a set of source errors into a uniform `OikosError` outcome.
///
/// Rules:
/// - If `attempted_any` is false → `Unsupported(capability)`.
/// - A single error is returned as-is; wrapping one failure in an
///   aggregate would only hide its variant from callers.
/// - If `id` is `Some` and every error is `InvalidIdentifier` →
///   `InvalidIdentifier(id)`: every source agreed the identifier is
///   unknown.
/// - Else → `AllSourcesFailed(errors)`.
pub(crate) fn collapse_errors(
    capability: &'static str,
    attempted_any: bool,
    mut errors: Vec<OikosError>,
    id: Option<&str>,
) -> OikosError {
    if !attempted_any {
        return OikosError::unsupported(capability);
    }
    if errors.len() == 1 {
        return errors.remove(0);
    }
    if let Some(id) = id
        && !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, OikosError::InvalidIdentifier { .. }))
    {
        return OikosError::invalid_identifier(id);
    }
    OikosError::AllSourcesFailed(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_when_no_source_attempted() {
        let e = collapse_errors("observations", false, vec![], Some("GDP"));
        match e {
            OikosError::Unsupported { capability } => assert_eq!(capability, "observations"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn single_error_passes_through_unwrapped() {
        let e = collapse_errors(
            "observations",
            true,
            vec![OikosError::auth_required("oikos-fred")],
            Some("GDP"),
        );
        assert!(matches!(e, OikosError::AuthRequired { .. }));
    }

    #[test]
    fn unanimous_invalid_identifier_collapses() {
        let errors = vec![
            OikosError::invalid_identifier("BAD_ID"),
            OikosError::invalid_identifier("BAD_ID"),
        ];
        let e = collapse_errors("observations", true, errors, Some("BAD_ID"));
        match e {
            OikosError::InvalidIdentifier { id } => assert_eq!(id, "BAD_ID"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn mixed_errors_aggregate() {
        let errors = vec![
            OikosError::invalid_identifier("X"),
            OikosError::upstream("oikos-fred", "503"),
        ];
        let e = collapse_errors("observations", true, errors, Some("X"));
        match e {
            OikosError::AllSourcesFailed(es) => assert_eq!(es.len(), 2),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
