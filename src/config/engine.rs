//! Engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ahp::Reciprocity;

/// AHP engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Reject matrices whose reciprocal pairs disagree
    #[serde(default)]
    pub strict_reciprocity: bool,

    /// Allowed deviation of `M[i][j] * M[j][i]` from 1 in strict mode
    #[serde(default = "default_tolerance")]
    pub reciprocity_tolerance: f64,
}

impl EngineConfig {
    /// Reciprocity policy applied to submitted matrices
    pub fn reciprocity(&self) -> Reciprocity {
        if self.strict_reciprocity {
            Reciprocity::Strict {
                tolerance: self.reciprocity_tolerance,
            }
        } else {
            Reciprocity::Lenient
        }
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.reciprocity_tolerance.is_finite() || self.reciprocity_tolerance <= 0.0 {
            return Err(ValidationError::InvalidTolerance(self.reciprocity_tolerance));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strict_reciprocity: false,
            reciprocity_tolerance: default_tolerance(),
        }
    }
}

// Loose enough for three-decimal inputs such as 0.333.
fn default_tolerance() -> f64 {
    0.01
}
