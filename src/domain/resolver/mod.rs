//! Artifact resolver domain - the catalog collaborator and its guard

mod artifact_resolver;
mod guard;

pub use artifact_resolver::ArtifactResolver;
pub use guard::require_model_input;

#[cfg(test)]
pub use artifact_resolver::mock;
