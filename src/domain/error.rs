use thiserror::Error;

use super::instance_types::InstanceTypeFormatError;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        message: String,
        #[source]
        source: Option<InstanceTypeFormatError>,
    },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Resolver error: {message}")]
    Resolver { message: String },
}

impl DomainError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            source: None,
        }
    }

    pub fn invalid_instance_type(instance_type: &str, source: InstanceTypeFormatError) -> Self {
        Self::InvalidArgument {
            message: format!(
                "Failed to parse instance type '{}': {}",
                instance_type, source
            ),
            source: Some(source),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn resolver(message: impl Into<String>) -> Self {
        Self::Resolver {
            message: message.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let error = DomainError::invalid_argument("Must specify scope for instance types.");
        assert_eq!(
            error.to_string(),
            "Invalid argument: Must specify scope for instance types."
        );
        assert!(error.is_invalid_argument());
        assert!(error.source().is_none());
    }

    #[test]
    fn test_invalid_instance_type_keeps_source() {
        let error = DomainError::invalid_instance_type(
            "ml.c5",
            InstanceTypeFormatError::Malformed,
        );
        assert_eq!(
            error.to_string(),
            "Invalid argument: Failed to parse instance type 'ml.c5': \
             Instance type must have 2 periods and start with 'ml'."
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Model 'x' not found");
        assert_eq!(error.to_string(), "Not found: Model 'x' not found");
        assert!(!error.is_invalid_argument());
    }
}
