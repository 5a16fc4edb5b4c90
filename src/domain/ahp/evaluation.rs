//! Step-by-step evaluation of a single comparison matrix.

use serde::{Deserialize, Serialize};

use super::{
    AhpError, ConsistencyChecker, ConsistencyReport, MatrixNormalizer, PairwiseComparisonMatrix,
    WeightVector,
};

/// Step label used for the criteria matrix.
pub const CRITERIA_STEP: &str = "criteria_weights";

/// Every intermediate of one matrix evaluation, for display and audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixEvaluation {
    pub step_name: String,
    pub original_matrix: PairwiseComparisonMatrix,
    pub column_sums: Vec<f64>,
    pub normalized_matrix: Vec<Vec<f64>>,
    pub weights: WeightVector,
    pub consistency_check: ConsistencyReport,
}

impl MatrixEvaluation {
    /// Runs normalization followed by the consistency check.
    pub fn evaluate(
        step_name: impl Into<String>,
        matrix: PairwiseComparisonMatrix,
    ) -> Result<Self, AhpError> {
        let normalized = MatrixNormalizer::normalize(&matrix)?;
        let consistency_check = ConsistencyChecker::check(&matrix, &normalized.weights)?;

        Ok(Self {
            step_name: step_name.into(),
            original_matrix: matrix,
            column_sums: normalized.column_sums,
            normalized_matrix: normalized.normalized_matrix,
            weights: normalized.weights,
            consistency_check,
        })
    }

    /// Evaluates the criteria comparison matrix.
    pub fn for_criteria(matrix: PairwiseComparisonMatrix) -> Result<Self, AhpError> {
        Self::evaluate(CRITERIA_STEP, matrix)
    }

    /// Evaluates an alternatives matrix under the named criterion.
    pub fn for_criterion(
        criterion_name: &str,
        matrix: PairwiseComparisonMatrix,
    ) -> Result<Self, AhpError> {
        Self::evaluate(format!("alternative_weights_for_{}", criterion_name), matrix)
    }

    /// Matrix order n.
    pub fn order(&self) -> usize {
        self.original_matrix.order()
    }
}
