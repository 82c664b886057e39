//! Instance type accessors

mod format;

pub use format::{InstanceType, InstanceTypeFormatError};

use tracing::{debug, warn};

use crate::domain::resolver::{require_model_input, ArtifactResolver};
use crate::domain::{DomainError, InstanceTypeScope, ModelQuery};

const PURPOSE: &str = "instance types";

fn require_scope(scope: Option<InstanceTypeScope>) -> Result<InstanceTypeScope, DomainError> {
    scope.ok_or_else(|| {
        warn!("Instance type lookup without scope");
        DomainError::invalid_argument("Must specify scope for instance types.")
    })
}

/// Retrieves the default instance type for the model matching `query`.
///
/// # Errors
/// * `DomainError::InvalidArgument` - if the model identifier is rejected by
///   the resolver, or if `scope` is `None`
/// * any error returned by the resolver, unchanged
pub async fn retrieve_default(
    resolver: &dyn ArtifactResolver,
    query: &ModelQuery,
    scope: Option<InstanceTypeScope>,
) -> Result<String, DomainError> {
    require_model_input(resolver, query, PURPOSE)?;
    let scope = require_scope(scope)?;

    debug!(
        model_id = ?query.model_id(),
        model_version = ?query.model_version(),
        region = ?query.region(),
        %scope,
        "Retrieving default instance type"
    );

    resolver.resolve_default_instance_type(query, scope).await
}

/// Retrieves the supported instance types for the model matching `query`.
///
/// Same failure contract as [`retrieve_default`].
pub async fn retrieve(
    resolver: &dyn ArtifactResolver,
    query: &ModelQuery,
    scope: Option<InstanceTypeScope>,
) -> Result<Vec<String>, DomainError> {
    require_model_input(resolver, query, PURPOSE)?;
    let scope = require_scope(scope)?;

    debug!(
        model_id = ?query.model_id(),
        model_version = ?query.model_version(),
        region = ?query.region(),
        %scope,
        "Retrieving supported instance types"
    );

    resolver.resolve_instance_types(query, scope).await
}

/// Returns true if a volume size may be set for `instance_type`.
///
/// # Errors
/// `DomainError::InvalidArgument` if the instance type is not of the form
/// `ml.<family>.<size>`.
pub fn volume_size_supported(instance_type: &str) -> Result<bool, DomainError> {
    Ok(InstanceType::parse(instance_type)?.volume_size_supported())
}
