//! Shared precondition for resolver-backed accessors

use tracing::warn;

use super::ArtifactResolver;
use crate::domain::model::ModelQuery;
use crate::domain::DomainError;

/// Fails with `InvalidArgument` unless the resolver accepts the query's
/// model identifier. `purpose` completes the sentence "when retrieving ...".
pub fn require_model_input(
    resolver: &dyn ArtifactResolver,
    query: &ModelQuery,
    purpose: &str,
) -> Result<(), DomainError> {
    if resolver.is_valid_model_input(query.model_id(), query.model_version()) {
        return Ok(());
    }

    warn!(
        model_id = ?query.model_id(),
        model_version = ?query.model_version(),
        resolver = resolver.resolver_name(),
        "Rejected model identifier"
    );

    Err(DomainError::invalid_argument(format!(
        "Must specify JumpStart `model_id` and `model_version` when retrieving {}.",
        purpose
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resolver::mock::MockArtifactResolver;

    #[test]
    fn test_accepts_valid_identifier() {
        let resolver = MockArtifactResolver::new();
        let query = ModelQuery::new("model", "1.0.0");
        assert!(require_model_input(&resolver, &query, "accept types").is_ok());
    }

    #[test]
    fn test_rejects_missing_identifier() {
        let resolver = MockArtifactResolver::new();
        let err = require_model_input(&resolver, &ModelQuery::default(), "instance types")
            .unwrap_err();

        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "Invalid argument: Must specify JumpStart `model_id` and `model_version` \
             when retrieving instance types."
        );
    }

    #[test]
    fn test_resolver_decides_validity() {
        let resolver = MockArtifactResolver::rejecting();
        let query = ModelQuery::new("model", "1.0.0");
        assert!(require_model_input(&resolver, &query, "accept types").is_err());
    }
}
