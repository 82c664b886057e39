//! Infrastructure layer - Resolver implementations and process setup

pub mod catalog;
pub mod logging;
