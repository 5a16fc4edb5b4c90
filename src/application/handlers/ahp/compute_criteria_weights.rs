//! ComputeCriteriaWeightsHandler - Weights and consistency of the criteria matrix.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{log_evaluation, matrix_error};
use crate::config::EngineConfig;
use crate::domain::ahp::{MatrixEvaluation, PairwiseComparisonMatrix, Reciprocity, CRITERIA_STEP};
use crate::domain::foundation::{DecisionId, DomainError, ValidationError};
use crate::ports::CalculationRecorder;

/// Command to evaluate a decision's criteria comparison matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeCriteriaWeightsCommand {
    pub decision_id: DecisionId,
    /// Criteria names in matrix row order.
    pub criteria_names: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
}

/// Handler for criteria weighting.
pub struct ComputeCriteriaWeightsHandler {
    recorder: Arc<dyn CalculationRecorder>,
    reciprocity: Reciprocity,
}

impl ComputeCriteriaWeightsHandler {
    pub fn new(recorder: Arc<dyn CalculationRecorder>) -> Self {
        Self {
            recorder,
            reciprocity: Reciprocity::default(),
        }
    }

    /// Creates a handler using the configured reciprocity policy.
    pub fn from_config(recorder: Arc<dyn CalculationRecorder>, engine: &EngineConfig) -> Self {
        Self::new(recorder).with_reciprocity(engine.reciprocity())
    }

    /// Sets the reciprocity policy applied to submitted matrices.
    pub fn with_reciprocity(mut self, reciprocity: Reciprocity) -> Self {
        self.reciprocity = reciprocity;
        self
    }

    pub async fn handle(
        &self,
        cmd: ComputeCriteriaWeightsCommand,
    ) -> Result<MatrixEvaluation, DomainError> {
        let matrix = PairwiseComparisonMatrix::with_policy(cmd.matrix, self.reciprocity)
            .map_err(matrix_error(CRITERIA_STEP))?;

        if cmd.criteria_names.len() != matrix.order() {
            return Err(DomainError::from(ValidationError::invalid_format(
                "criteria_names",
                format!(
                    "expected {} names for a {}x{} matrix, got {}",
                    matrix.order(),
                    matrix.order(),
                    matrix.order(),
                    cmd.criteria_names.len()
                ),
            ))
            .with_detail("matrix", CRITERIA_STEP));
        }

        let evaluation =
            MatrixEvaluation::for_criteria(matrix).map_err(matrix_error(CRITERIA_STEP))?;
        log_evaluation(Some(&cmd.decision_id), &evaluation);

        self.recorder
            .record_criteria_weights(&cmd.decision_id, &cmd.criteria_names, &evaluation)
            .await;

        Ok(evaluation)
    }
}
