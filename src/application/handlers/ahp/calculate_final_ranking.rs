//! CalculateFinalRankingHandler - Synthesis of a decision's final ranking.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::matrix_error;
use crate::domain::ahp::{RankAggregator, RankedAlternative, WeightVector};
use crate::domain::foundation::{DecisionId, DomainError};
use crate::ports::{CalculationRecorder, DecisionRepository, RepositoryError};

const RANKING_STEP: &str = "final_ranking";

/// Command to combine computed weights into a final ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateFinalRankingCommand {
    pub decision_id: DecisionId,
    pub alternative_names: Vec<String>,
    /// One weight per criterion, in the decision's criteria order.
    pub criteria_weights: Vec<f64>,
    /// `[criterion][alternative]` local weights.
    pub alternative_weights_by_criteria: Vec<Vec<f64>>,
}

/// Handler for final ranking.
///
/// The decision's criteria names are a required input and are looked up
/// fail-closed. Recording the result is fire-and-forget.
pub struct CalculateFinalRankingHandler {
    repository: Arc<dyn DecisionRepository>,
    recorder: Arc<dyn CalculationRecorder>,
}

impl CalculateFinalRankingHandler {
    pub fn new(
        repository: Arc<dyn DecisionRepository>,
        recorder: Arc<dyn CalculationRecorder>,
    ) -> Self {
        Self {
            repository,
            recorder,
        }
    }

    pub async fn handle(
        &self,
        cmd: CalculateFinalRankingCommand,
    ) -> Result<Vec<RankedAlternative>, DomainError> {
        // 1. Load the criteria names this ranking is explained by
        let decision = self
            .repository
            .get_decision(&cmd.decision_id)
            .await?
            .ok_or(RepositoryError::DecisionNotFound(cmd.decision_id))?;
        let criteria_names = decision.criteria_names();

        // 2. Synthesize
        let criteria_weights = WeightVector::new(cmd.criteria_weights);
        let by_criteria: Vec<WeightVector> = cmd
            .alternative_weights_by_criteria
            .into_iter()
            .map(WeightVector::new)
            .collect();

        let ranking = RankAggregator::aggregate(
            &cmd.alternative_names,
            &criteria_weights,
            &by_criteria,
            Some(criteria_names.as_slice()),
        )
        .map_err(matrix_error(RANKING_STEP))?;

        if let Some(best) = ranking.first() {
            info!(
                decision_id = %cmd.decision_id,
                alternatives = ranking.len(),
                best = %best.alternative,
                score = best.weight,
                "Final ranking calculated"
            );
        }

        // 3. Hand off
        self.recorder
            .record_final_ranking(&cmd.decision_id, &cmd.alternative_names, &ranking)
            .await;

        Ok(ranking)
    }
}
