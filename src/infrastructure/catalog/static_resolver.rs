//! In-memory artifact resolver

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use super::{ModelSpec, ScopeSpec};
use crate::config::CatalogConfig;
use crate::domain::{ArtifactResolver, DomainError, InstanceTypeScope, ModelQuery};

/// Resolver backed by a fixed set of model specs, keyed by `(model_id, version)`.
///
/// Tolerance flags are accepted and ignored; the entries carry no
/// vulnerability or deprecation status.
#[derive(Debug)]
pub struct StaticArtifactResolver {
    default_region: String,
    models: HashMap<(String, String), ModelSpec>,
}

impl StaticArtifactResolver {
    pub fn new(default_region: impl Into<String>) -> Self {
        Self {
            default_region: default_region.into(),
            models: HashMap::new(),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        config
            .models
            .iter()
            .cloned()
            .fold(Self::new(config.default_region.clone()), Self::with_model)
    }

    pub fn with_model(mut self, spec: ModelSpec) -> Self {
        self.models
            .insert((spec.model_id.clone(), spec.version.clone()), spec);
        self
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    fn lookup(&self, query: &ModelQuery) -> Result<&ModelSpec, DomainError> {
        let model_id = query.model_id().unwrap_or_default();
        let version = query.model_version().unwrap_or_default();
        let region = query.region().unwrap_or(self.default_region.as_str());

        let spec = self
            .models
            .get(&(model_id.to_string(), version.to_string()))
            .ok_or_else(|| {
                DomainError::not_found(format!(
                    "Model '{}' version '{}' not found",
                    model_id, version
                ))
            })?;

        if !spec.is_offered_in(region) {
            return Err(DomainError::not_found(format!(
                "Model '{}' version '{}' is not available in region '{}'",
                model_id, version, region
            )));
        }

        debug!(model_id, version, region, "Resolved model spec");
        Ok(spec)
    }

    fn scope_spec<'a>(
        spec: &'a ModelSpec,
        scope: InstanceTypeScope,
    ) -> Result<&'a ScopeSpec, DomainError> {
        spec.scope(scope).ok_or_else(|| {
            DomainError::not_found(format!(
                "Model '{}' has no {} instance types",
                spec.model_id, scope
            ))
        })
    }
}

#[async_trait]
impl ArtifactResolver for StaticArtifactResolver {
    async fn resolve_supported_accept_types(
        &self,
        query: &ModelQuery,
    ) -> Result<Vec<String>, DomainError> {
        Ok(self.lookup(query)?.accept_types.clone())
    }

    async fn resolve_default_accept_type(&self, query: &ModelQuery) -> Result<String, DomainError> {
        let spec = self.lookup(query)?;

        spec.default_accept_type.clone().ok_or_else(|| {
            DomainError::not_found(format!(
                "Model '{}' has no default accept type",
                spec.model_id
            ))
        })
    }

    async fn resolve_instance_types(
        &self,
        query: &ModelQuery,
        scope: InstanceTypeScope,
    ) -> Result<Vec<String>, DomainError> {
        let spec = self.lookup(query)?;
        Ok(Self::scope_spec(spec, scope)?.instance_types.clone())
    }

    async fn resolve_default_instance_type(
        &self,
        query: &ModelQuery,
        scope: InstanceTypeScope,
    ) -> Result<String, DomainError> {
        let spec = self.lookup(query)?;

        Self::scope_spec(spec, scope)?.default.clone().ok_or_else(|| {
            DomainError::not_found(format!(
                "Model '{}' has no default {} instance type",
                spec.model_id, scope
            ))
        })
    }

    fn resolver_name(&self) -> &'static str {
        "static"
    }
}
