//! Artifact resolver trait for catalog-backed model metadata

use async_trait::async_trait;

use crate::domain::model::{is_model_input, InstanceTypeScope, ModelQuery};
use crate::domain::DomainError;

/// Trait for resolving deployment metadata of catalog models.
///
/// Implementations own everything about the catalog: region defaulting,
/// vulnerability and deprecation gating, and whatever I/O is needed to
/// reach the model specs. Errors they return are surfaced to callers
/// unchanged.
#[async_trait]
pub trait ArtifactResolver: Send + Sync {
    /// Whether `(model_id, model_version)` is a legitimate catalog reference.
    fn is_valid_model_input(&self, model_id: Option<&str>, model_version: Option<&str>) -> bool {
        is_model_input(model_id, model_version)
    }

    /// Ordered accept types the model supports at inference
    async fn resolve_supported_accept_types(
        &self,
        query: &ModelQuery,
    ) -> Result<Vec<String>, DomainError>;

    /// Default accept type for the model
    async fn resolve_default_accept_type(&self, query: &ModelQuery)
        -> Result<String, DomainError>;

    /// Ordered instance types the model supports for `scope`
    async fn resolve_instance_types(
        &self,
        query: &ModelQuery,
        scope: InstanceTypeScope,
    ) -> Result<Vec<String>, DomainError>;

    /// Default instance type for `scope`
    async fn resolve_default_instance_type(
        &self,
        query: &ModelQuery,
        scope: InstanceTypeScope,
    ) -> Result<String, DomainError>;

    /// Get resolver name for logging/debugging
    fn resolver_name(&self) -> &'static str;
}


#[cfg(test)]
mod tests {
    use super::mock::*;
    use super::*;

    #[derive(Debug)]
    struct DefaultsOnly;

    #[async_trait]
    impl ArtifactResolver for DefaultsOnly {
        async fn resolve_supported_accept_types(
            &self,
            _query: &ModelQuery,
        ) -> Result<Vec<String>, DomainError> {
            Ok(Vec::new())
        }

        async fn resolve_default_accept_type(
            &self,
            _query: &ModelQuery,
        ) -> Result<String, DomainError> {
            Err(DomainError::not_found("none"))
        }

        async fn resolve_instance_types(
            &self,
            _query: &ModelQuery,
            _scope: InstanceTypeScope,
        ) -> Result<Vec<String>, DomainError> {
            Ok(Vec::new())
        }

        async fn resolve_default_instance_type(
            &self,
            _query: &ModelQuery,
            _scope: InstanceTypeScope,
        ) -> Result<String, DomainError> {
            Err(DomainError::not_found("none"))
        }

        fn resolver_name(&self) -> &'static str {
            "defaults-only"
        }
    }

    #[test]
    fn test_default_model_input_rule() {
        let resolver = DefaultsOnly;
        assert!(resolver.is_valid_model_input(Some("model"), Some("1.0.0")));
        assert!(!resolver.is_valid_model_input(Some("model"), None));
        assert!(!resolver.is_valid_model_input(None, None));
    }

    #[tokio::test]
    async fn test_mock_records_calls() {
        let resolver = MockArtifactResolver::new();
        let query = ModelQuery::new("model", "1.0.0");

        resolver.resolve_supported_accept_types(&query).await.unwrap();
        resolver
            .resolve_instance_types(&query, InstanceTypeScope::Training)
            .await
            .unwrap();

        assert_eq!(
            resolver.calls(),
            vec![
                ResolverCall::SupportedAcceptTypes(query.clone()),
                ResolverCall::InstanceTypes(query, InstanceTypeScope::Training),
            ]
        );
    }
}
