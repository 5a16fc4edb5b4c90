//! ComputeAlternativeWeightsHandler - Alternative weights under one criterion.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{log_evaluation, matrix_error};
use crate::config::EngineConfig;
use crate::domain::ahp::{MatrixEvaluation, PairwiseComparisonMatrix, Reciprocity};
use crate::domain::foundation::{CriterionId, DecisionId, DomainError, ValidationError};
use crate::ports::CalculationRecorder;

/// Command to evaluate the alternatives matrix of one criterion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeAlternativeWeightsCommand {
    pub decision_id: DecisionId,
    pub criterion_id: CriterionId,
    pub criterion_name: String,
    /// Alternative names in matrix row order.
    pub alternative_names: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
}

/// Handler for per-criterion alternative weighting.
pub struct ComputeAlternativeWeightsHandler {
    recorder: Arc<dyn CalculationRecorder>,
    reciprocity: Reciprocity,
}

impl ComputeAlternativeWeightsHandler {
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
        cmd: ComputeAlternativeWeightsCommand,
    ) -> Result<MatrixEvaluation, DomainError> {
        let label = format!("alternative_weights_for_{}", cmd.criterion_name);

        let matrix = PairwiseComparisonMatrix::with_policy(cmd.matrix, self.reciprocity)
            .map_err(matrix_error(&label))?;

        if cmd.alternative_names.len() != matrix.order() {
            return Err(DomainError::from(ValidationError::invalid_format(
                "alternative_names",
                format!(
                    "expected {} names for a {}x{} matrix, got {}",
                    matrix.order(),
                    matrix.order(),
                    matrix.order(),
                    cmd.alternative_names.len()
                ),
            ))
            .with_detail("matrix", label));
        }

        let evaluation = MatrixEvaluation::for_criterion(&cmd.criterion_name, matrix)
            .map_err(matrix_error(&label))?;
        log_evaluation(Some(&cmd.decision_id), &evaluation);

        self.recorder
            .record_alternative_weights(
                &cmd.decision_id,
                &cmd.criterion_id,
                &cmd.alternative_names,
                &evaluation,
            )
            .await;

        Ok(evaluation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryDecisionRepository;
    use crate::adapters::recording::RepositoryRecorder;
    use crate::domain::decision::DecisionProblem;
    use crate::domain::foundation::ErrorCode;
    use crate::ports::DecisionRepository;

    async fn setup() -> (Arc<InMemoryDecisionRepository>, DecisionProblem) {
        let repo = Arc::new(InMemoryDecisionRepository::new());
        let criteria = repo.ensure_criteria(&["Price".to_string()]).await.unwrap();
        let alternatives = repo
            .ensure_alternatives(&["Acme".to_string(), "Globex".to_string()])
            .await
            .unwrap();
        let decision = DecisionProblem::new("Supplier", None, criteria, alternatives).unwrap();
        repo.create_decision(&decision).await.unwrap();
        (repo, decision)
    }

    fn command(decision: &DecisionProblem, matrix: Vec<Vec<f64>>) -> ComputeAlternativeWeightsCommand {
        ComputeAlternativeWeightsCommand {
            decision_id: decision.id,
            criterion_id: decision.criteria[0].id,
            criterion_name: decision.criteria[0].name.clone(),
            alternative_names: decision.alternative_names(),
            matrix,
        }
    }

    #[tokio::test]
    async fn stores_scores_through_repository_recorder() {
        let (repo, decision) = setup().await;
        let handler =
            ComputeAlternativeWeightsHandler::new(Arc::new(RepositoryRecorder::new(repo.clone())));

        let evaluation = handler
            .handle(command(&decision, vec![vec![1.0, 4.0], vec![0.25, 1.0]]))
            .await
            .unwrap();

        assert_eq!(evaluation.step_name, "alternative_weights_for_Price");
        assert!((evaluation.weights[0] - 0.8).abs() < 1e-12);

        let scores = repo
            .criterion_scores(&decision.id, &decision.criteria[0].id)
            .await;
        assert_eq!(scores.len(), 2);
        assert!(repo
            .get_consistency_check(&decision.id, Some(decision.criteria[0].id))
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn error_names_the_criterion_matrix() {
        let (repo, decision) = setup().await;
        let handler =
            ComputeAlternativeWeightsHandler::new(Arc::new(RepositoryRecorder::new(repo.clone())));

        let err = handler
            .handle(command(&decision, vec![vec![1.0, -1.0], vec![1.0, 1.0]]))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidMatrix);
        assert_eq!(
            err.details.get("matrix"),
            Some(&"alternative_weights_for_Price".to_string())
        );
        assert_eq!(repo.matrix_count().await, 0);
    }

    #[tokio::test]
    async fn name_count_mismatch_is_rejected() {
        let (repo, decision) = setup().await;
        let handler = ComputeAlternativeWeightsHandler::new(Arc::new(RepositoryRecorder::new(repo)));
        let mut cmd = command(&decision, vec![vec![1.0, 4.0], vec![0.25, 1.0]]);
        cmd.alternative_names.push("Initech".to_string());

        let err = handler.handle(cmd).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
