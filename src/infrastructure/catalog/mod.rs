//! Static model catalog - an in-memory `ArtifactResolver`

mod spec;
mod static_resolver;

pub use spec::{ModelSpec, ScopeSpec};
pub use static_resolver::StaticArtifactResolver;
