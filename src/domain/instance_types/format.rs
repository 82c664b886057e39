//! Instance type identifier parsing

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::domain::DomainError;

const PREFIX: &str = "ml";

/// Instance type format errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceTypeFormatError {
    #[error("Instance type must have 2 periods and start with 'ml'.")]
    Malformed,
}

/// Compute instance type of the form `ml.<family>.<size>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceType {
    raw: String,
    family_end: usize,
}

impl InstanceType {
    /// Parse an instance type, wrapping any format failure in
    /// `DomainError::InvalidArgument` that names the input.
    pub fn parse(instance_type: &str) -> Result<Self, DomainError> {
        instance_type
            .parse::<Self>()
            .map_err(|e| DomainError::invalid_instance_type(instance_type, e))
    }

    /// Hardware class, e.g. `c5d`, `g5`, `p3`
    pub fn family(&self) -> &str {
        &self.raw[PREFIX.len() + 1..self.family_end]
    }

    /// Size within the family, e.g. `xlarge`
    pub fn size(&self) -> &str {
        &self.raw[self.family_end + 1..]
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether a storage volume size may be configured for this instance.
    ///
    /// Families with a `d` anywhere in the name ship with attached NVMe
    /// storage, and the `g5` family does not accept an EBS volume either.
    pub fn volume_size_supported(&self) -> bool {
        let family = self.family();
        !family.contains('d') && !family.starts_with("g5")
    }
}

impl FromStr for InstanceType {
    type Err = InstanceTypeFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();

        if parts.len() != 3 || parts[0] != PREFIX {
            return Err(InstanceTypeFormatError::Malformed);
        }

        Ok(Self {
            raw: s.to_string(),
            family_end: PREFIX.len() + 1 + parts[1].len(),
        })
    }
}

impl fmt::Display for InstanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
