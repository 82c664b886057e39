//! Model domain - catalog lookup parameters

mod entity;
mod validation;

pub use entity::{InstanceTypeScope, ModelQuery};
pub use validation::is_model_input;
