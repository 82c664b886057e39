//! Domain layer - Core accessors, entities and the resolver seam

pub mod accept_types;
pub mod error;
pub mod instance_types;
pub mod model;
pub mod resolver;

pub use error::DomainError;
pub use instance_types::{InstanceType, InstanceTypeFormatError};
pub use model::{is_model_input, InstanceTypeScope, ModelQuery};
pub use resolver::{require_model_input, ArtifactResolver};
