//! Model query and scope types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Usage context for an instance-type lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceTypeScope {
    Training,
    Inference,
}

impl InstanceTypeScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Training => "training",
            Self::Inference => "inference",
        }
    }
}

impl fmt::Display for InstanceTypeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InstanceTypeScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "training" => Ok(Self::Training),
            "inference" => Ok(Self::Inference),
            other => Err(format!(
                "Unknown scope '{}', expected 'training' or 'inference'",
                other
            )),
        }
    }
}

/// Lookup parameters shared by every catalog accessor.
///
/// `model_id` and `model_version` are opaque catalog keys. They are never
/// inspected here; the resolver decides whether they form a usable pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelQuery {
    pub region: Option<String>,
    pub model_id: Option<String>,
    pub model_version: Option<String>,
    pub tolerate_vulnerable_model: bool,
    pub tolerate_deprecated_model: bool,
}

impl ModelQuery {
    /// Create a query for the given model ID and version
    pub fn new(model_id: impl Into<String>, model_version: impl Into<String>) -> Self {
        Self {
            model_id: Some(model_id.into()),
            model_version: Some(model_version.into()),
            ..Self::default()
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_tolerate_vulnerable_model(mut self, tolerate: bool) -> Self {
        self.tolerate_vulnerable_model = tolerate;
        self
    }

    pub fn with_tolerate_deprecated_model(mut self, tolerate: bool) -> Self {
        self.tolerate_deprecated_model = tolerate;
        self
    }

    pub fn model_id(&self) -> Option<&str> {
        self.model_id.as_deref()
    }

    pub fn model_version(&self) -> Option<&str> {
        self.model_version.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_has_nothing_set() {
        let query = ModelQuery::default();
        assert!(query.model_id().is_none());
        assert!(query.model_version().is_none());
        assert!(query.region().is_none());
        assert!(!query.tolerate_vulnerable_model);
        assert!(!query.tolerate_deprecated_model);
    }

    #[test]
    fn test_query_builder() {
        let query = ModelQuery::new("pytorch-ic-mobilenet-v2", "1.0.0")
            .with_region("us-west-2")
            .with_tolerate_vulnerable_model(true);

        assert_eq!(query.model_id(), Some("pytorch-ic-mobilenet-v2"));
        assert_eq!(query.model_version(), Some("1.0.0"));
        assert_eq!(query.region(), Some("us-west-2"));
        assert!(query.tolerate_vulnerable_model);
        assert!(!query.tolerate_deprecated_model);
    }

    #[test]
    fn test_scope_parsing() {
        assert_eq!(
            "training".parse::<InstanceTypeScope>(),
            Ok(InstanceTypeScope::Training)
        );
        assert_eq!(
            "inference".parse::<InstanceTypeScope>(),
            Ok(InstanceTypeScope::Inference)
        );
        assert!("Training".parse::<InstanceTypeScope>().is_err());
        assert_eq!(InstanceTypeScope::Inference.to_string(), "inference");
    }

    #[test]
    fn test_scope_serde() {
        let json = serde_json::to_string(&InstanceTypeScope::Training).unwrap();
        assert_eq!(json, "\"training\"");

        let scope: InstanceTypeScope = serde_json::from_str("\"inference\"").unwrap();
        assert_eq!(scope, InstanceTypeScope::Inference);
    }
}
