//! Model Accessors
//!
//! Deployment metadata lookups for catalog models:
//! - Supported and default accept (response content) types
//! - Supported and default compute instance types per scope
//! - Volume-size support check for instance type identifiers
//!
//! Lookups go through an [`ArtifactResolver`]; the crate only checks
//! preconditions and passes the query on.

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{
    accept_types, instance_types, ArtifactResolver, DomainError, InstanceType,
    InstanceTypeScope, ModelQuery,
};
pub use infrastructure::catalog::{ModelSpec, StaticArtifactResolver};
