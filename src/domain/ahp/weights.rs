//! Priority weight vector.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Ordered priorities, one per item in matrix row order.
///
/// Vectors produced by the normalizer sum to 1.0; vectors received from
/// callers (e.g. stored criteria weights) are taken as given.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Wraps raw weights.
    pub fn new(weights: Vec<f64>) -> Self {
        Self(weights)
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Returns the inner values.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Consumes the vector, returning its values.
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for WeightVector {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<f64>> for WeightVector {
    fn from(weights: Vec<f64>) -> Self {
        Self(weights)
    }
}

impl From<WeightVector> for Vec<f64> {
    fn from(weights: WeightVector) -> Self {
        weights.0
    }
}
