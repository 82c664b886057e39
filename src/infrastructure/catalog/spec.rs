//! Model spec entries served by the static resolver

use serde::{Deserialize, Serialize};

use crate::domain::InstanceTypeScope;

/// Instance types offered for one scope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeSpec {
    #[serde(default)]
    pub instance_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// Deployment metadata for one model version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    pub model_id: String,
    pub version: String,

    /// Regions the model is offered in; empty means every region
    #[serde(default)]
    pub regions: Vec<String>,

    #[serde(default)]
    pub accept_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_accept_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training: Option<ScopeSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inference: Option<ScopeSpec>,
}

impl ModelSpec {
    pub fn new(model_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            version: version.into(),
            regions: Vec::new(),
            accept_types: Vec::new(),
            default_accept_type: None,
            training: None,
            inference: None,
        }
    }

    pub fn with_regions(mut self, regions: &[&str]) -> Self {
        self.regions = regions.iter().map(|r| r.to_string()).collect();
        self
    }

    /// Set accept types; the first one becomes the default
    pub fn with_accept_types(mut self, types: &[&str]) -> Self {
        self.accept_types = types.iter().map(|t| t.to_string()).collect();
        self.default_accept_type = self.accept_types.first().cloned();
        self
    }

    /// Set instance types for `scope`; the first one becomes the default
    pub fn with_instance_types(mut self, scope: InstanceTypeScope, types: &[&str]) -> Self {
        let instance_types: Vec<String> = types.iter().map(|t| t.to_string()).collect();
        let spec = ScopeSpec {
            default: instance_types.first().cloned(),
            instance_types,
        };

        match scope {
            InstanceTypeScope::Training => self.training = Some(spec),
            InstanceTypeScope::Inference => self.inference = Some(spec),
        }
        self
    }

    pub fn scope(&self, scope: InstanceTypeScope) -> Option<&ScopeSpec> {
        match scope {
            InstanceTypeScope::Training => self.training.as_ref(),
            InstanceTypeScope::Inference => self.inference.as_ref(),
        }
    }

    pub fn is_offered_in(&self, region: &str) -> bool {
        self.regions.is_empty() || self.regions.iter().any(|r| r == region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_defaults_from_first_entry() {
        let spec = ModelSpec::new("model", "1.0.0")
            .with_accept_types(&["application/json", "text/csv"])
            .with_instance_types(InstanceTypeScope::Inference, &["ml.m5.large"]);

        assert_eq!(spec.default_accept_type.as_deref(), Some("application/json"));
        assert_eq!(
            spec.scope(InstanceTypeScope::Inference).unwrap().default.as_deref(),
            Some("ml.m5.large")
        );
        assert!(spec.scope(InstanceTypeScope::Training).is_none());
    }

    #[test]
    fn test_region_offering() {
        let everywhere = ModelSpec::new("model", "1.0.0");
        assert!(everywhere.is_offered_in("af-south-1"));

        let limited = ModelSpec::new("model", "1.0.0").with_regions(&["us-east-1"]);
        assert!(limited.is_offered_in("us-east-1"));
        assert!(!limited.is_offered_in("us-west-2"));
    }
}
