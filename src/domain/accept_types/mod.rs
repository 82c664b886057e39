//! Accept type accessors
//!
//! Look up the response content types a catalog model returns at inference.

use tracing::debug;

use crate::domain::resolver::{require_model_input, ArtifactResolver};
use crate::domain::{DomainError, ModelQuery};

const PURPOSE: &str = "accept types";

/// Retrieves the supported accept types for the model matching `query`.
///
/// # Errors
/// * `DomainError::InvalidArgument` - if the resolver does not accept the
///   model identifier; the resolver is not consulted further
/// * any error returned by the resolver, unchanged
pub async fn retrieve_options(
    resolver: &dyn ArtifactResolver,
    query: &ModelQuery,
) -> Result<Vec<String>, DomainError> {
    require_model_input(resolver, query, PURPOSE)?;

    debug!(
        model_id = ?query.model_id(),
        model_version = ?query.model_version(),
        region = ?query.region(),
        "Retrieving supported accept types"
    );

    resolver.resolve_supported_accept_types(query).await
}

/// Retrieves the default accept type for the model matching `query`.
///
/// Same failure contract as [`retrieve_options`].
pub async fn retrieve_default(
    resolver: &dyn ArtifactResolver,
    query: &ModelQuery,
) -> Result<String, DomainError> {
    require_model_input(resolver, query, PURPOSE)?;

    debug!(
        model_id = ?query.model_id(),
        model_version = ?query.model_version(),
        region = ?query.region(),
        "Retrieving default accept type"
    );

    resolver.resolve_default_accept_type(query).await
}
