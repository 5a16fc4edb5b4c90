//! RankAlternativesHandler - One-shot ranking from per-criterion matrices.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{log_evaluation, matrix_error};
use crate::config::EngineConfig;
use crate::domain::ahp::{
    MatrixEvaluation, PairwiseComparisonMatrix, RankAggregator, RankedAlternative, Reciprocity,
    WeightVector,
};
use crate::domain::foundation::{CriterionId, DecisionId, DomainError, ValidationError};
use crate::ports::CalculationRecorder;

/// Command to evaluate every alternatives matrix and rank in one call.
///
/// Criteria weights are already computed; `criteria_names`, `criteria_ids`
/// and `criteria_weights` share one order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankAlternativesCommand {
    pub decision_id: DecisionId,
    pub criteria_weights: Vec<f64>,
    pub criteria_names: Vec<String>,
    pub criteria_ids: Vec<CriterionId>,
    /// Alternative names in alternatives matrix row order.
    pub alternatives: Vec<String>,
    /// Criterion name -> alternatives comparison matrix.
    pub matrices_by_criteria: HashMap<String, Vec<Vec<f64>>>,
}

/// Handler evaluating each criterion's alternatives matrix, then ranking.
///
/// Every evaluation and the final ranking are handed to the recorder.
pub struct RankAlternativesHandler {
    recorder: Arc<dyn CalculationRecorder>,
    reciprocity: Reciprocity,
}

impl RankAlternativesHandler {
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
        mut cmd: RankAlternativesCommand,
    ) -> Result<Vec<RankedAlternative>, DomainError> {
        if cmd.criteria_ids.len() != cmd.criteria_names.len() {
            return Err(ValidationError::invalid_format(
                "criteria_ids",
                format!(
                    "expected {} ids, one per criterion name, got {}",
                    cmd.criteria_names.len(),
                    cmd.criteria_ids.len()
                ),
            )
            .into());
        }

        // 1. Evaluate and record each criterion's alternatives matrix
        let mut by_criteria = Vec::with_capacity(cmd.criteria_names.len());
        let mut checks = BTreeMap::new();
        for (criterion, criterion_id) in cmd.criteria_names.iter().zip(&cmd.criteria_ids) {
            let rows = cmd.matrices_by_criteria.remove(criterion).ok_or_else(|| {
                ValidationError::invalid_format(
                    "matrices_by_criteria",
                    format!("missing matrix for criterion '{}'", criterion),
                )
            })?;

            let evaluation = self.evaluate(criterion, rows)?;
            expect_names(&cmd.alternatives, &evaluation)?;
            log_evaluation(Some(&cmd.decision_id), &evaluation);

            self.recorder
                .record_alternative_weights(
                    &cmd.decision_id,
                    criterion_id,
                    &cmd.alternatives,
                    &evaluation,
                )
                .await;

            checks.insert(criterion.clone(), evaluation.consistency_check);
            by_criteria.push(evaluation.weights);
        }

        // 2. Synthesize
        let mut ranking = RankAggregator::aggregate(
            &cmd.alternatives,
            &WeightVector::new(cmd.criteria_weights),
            &by_criteria,
            Some(cmd.criteria_names.as_slice()),
        )
        .map_err(matrix_error("final_ranking"))?;

        for ranked in &mut ranking {
            ranked.consistency_checks = Some(checks.clone());
        }

        if let Some(best) = ranking.first() {
            info!(
                decision_id = %cmd.decision_id,
                criteria = cmd.criteria_names.len(),
                alternatives = ranking.len(),
                best = %best.alternative,
                "One-shot ranking calculated"
            );
        }

        // 3. Hand off
        self.recorder
            .record_final_ranking(&cmd.decision_id, &cmd.alternatives, &ranking)
            .await;

        Ok(ranking)
    }

    fn evaluate(&self, criterion: &str, rows: Vec<Vec<f64>>) -> Result<MatrixEvaluation, DomainError> {
        let label = format!("alternative_weights_for_{}", criterion);
        let matrix = PairwiseComparisonMatrix::with_policy(rows, self.reciprocity)
            .map_err(matrix_error(&label))?;
        MatrixEvaluation::for_criterion(criterion, matrix).map_err(matrix_error(&label))
    }
}

fn expect_names(names: &[String], evaluation: &MatrixEvaluation) -> Result<(), DomainError> {
    if names.len() == evaluation.order() {
        return Ok(());
    }
    Err(DomainError::from(ValidationError::invalid_format(
        "alternatives",
        format!(
            "expected {} names for a {}x{} matrix, got {}",
            evaluation.order(),
            evaluation.order(),
            evaluation.order(),
            names.len()
        ),
    ))
    .with_detail("matrix", evaluation.step_name.clone()))
}
