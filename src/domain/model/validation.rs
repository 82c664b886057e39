//! Model identifier validation utilities

/// Returns true when both catalog keys are present and non-empty.
///
/// This is the default acceptance rule used by resolvers that do not
/// supply their own.
pub fn is_model_input(model_id: Option<&str>, model_version: Option<&str>) -> bool {
    matches!(
        (model_id, model_version),
        (Some(id), Some(version)) if !id.is_empty() && !version.is_empty()
    )
}
