//! Repository-backed calculation recorder.
//!
//! Writes every computed result through a `DecisionRepository`. Failures are
//! logged and swallowed: the caller already holds a valid numeric result.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ahp::{MatrixEvaluation, RankedAlternative};
use crate::domain::foundation::{CriterionId, DecisionId, DecisionStatus};
use crate::ports::{
    AlternativeScore, CalculationRecorder, ComparisonMatrixRecord, DecisionRepository,
    MatrixScope, RepositoryError,
};

/// Records calculations into the decision repository.
pub struct RepositoryRecorder {
    repository: Arc<dyn DecisionRepository>,
}

impl RepositoryRecorder {
    /// Creates a recorder writing to `repository`.
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    async fn save_criteria(
        &self,
        decision_id: &DecisionId,
        criteria_names: &[String],
        evaluation: &MatrixEvaluation,
    ) -> Result<(), RepositoryError> {
        let criteria = self.repository.ensure_criteria(criteria_names).await?;
        let criterion_ids: Vec<CriterionId> = criteria.iter().map(|c| c.id).collect();

        self.repository
            .save_comparison_matrix(
                decision_id,
                ComparisonMatrixRecord {
                    scope: MatrixScope::Criteria {
                        criterion_ids: criterion_ids.clone(),
                    },
                    matrix: evaluation.original_matrix.clone(),
                },
            )
            .await?;

        let weights: Vec<(CriterionId, f64)> = criterion_ids
            .into_iter()
            .zip(evaluation.weights.iter().copied())
            .collect();
        self.repository
            .save_criteria_weights(decision_id, &weights)
            .await?;

        self.repository
            .save_consistency_check(decision_id, None, &evaluation.consistency_check)
            .await
    }

    async fn save_alternatives(
        &self,
        decision_id: &DecisionId,
        criterion_id: &CriterionId,
        alternative_names: &[String],
        evaluation: &MatrixEvaluation,
    ) -> Result<(), RepositoryError> {
        let alternatives = self.repository.ensure_alternatives(alternative_names).await?;

        self.repository
            .save_comparison_matrix(
                decision_id,
                ComparisonMatrixRecord {
                    scope: MatrixScope::Alternatives {
                        criterion_id: *criterion_id,
                        alternative_ids: alternatives.iter().map(|a| a.id).collect(),
                    },
                    matrix: evaluation.original_matrix.clone(),
                },
            )
            .await?;

        let scores: Vec<AlternativeScore> = alternatives
            .iter()
            .zip(evaluation.weights.iter())
            .map(|(alternative, &score)| AlternativeScore {
                alternative_id: alternative.id,
                score,
                rank: None,
            })
            .collect();
        self.repository
            .save_alternative_scores(decision_id, Some(*criterion_id), &scores, false)
            .await?;

        self.repository
            .save_consistency_check(
                decision_id,
                Some(*criterion_id),
                &evaluation.consistency_check,
            )
            .await
    }

    async fn save_final(
        &self,
        decision_id: &DecisionId,
        alternative_names: &[String],
        ranking: &[RankedAlternative],
    ) -> Result<(), RepositoryError> {
        let alternatives = self.repository.ensure_alternatives(alternative_names).await?;

        let scores = ranking
            .iter()
            .map(|ranked| {
                alternatives
                    .get(ranked.source_index)
                    .map(|alternative| AlternativeScore {
                        alternative_id: alternative.id,
                        score: ranked.weight,
                        rank: Some(ranked.rank),
                    })
                    .ok_or_else(|| {
                        RepositoryError::InvalidInput(format!(
                            "No alternative at position {}",
                            ranked.source_index
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.repository
            .save_alternative_scores(decision_id, None, &scores, true)
            .await?;

        self.repository
            .update_status(decision_id, DecisionStatus::Completed)
            .await
    }
}

#[async_trait]
impl CalculationRecorder for RepositoryRecorder {
    async fn record_criteria_weights(
        &self,
        decision_id: &DecisionId,
        criteria_names: &[String],
        evaluation: &MatrixEvaluation,
    ) {
        match self.save_criteria(decision_id, criteria_names, evaluation).await {
            Ok(()) => debug!(decision_id = %decision_id, "Recorded criteria weights"),
            Err(e) => warn!(
                decision_id = %decision_id,
                error = %e,
                "Failed to record criteria weights"
            ),
        }
    }

    async fn record_alternative_weights(
        &self,
        decision_id: &DecisionId,
        criterion_id: &CriterionId,
        alternative_names: &[String],
        evaluation: &MatrixEvaluation,
    ) {
        match self
            .save_alternatives(decision_id, criterion_id, alternative_names, evaluation)
            .await
        {
            Ok(()) => debug!(
                decision_id = %decision_id,
                criterion_id = %criterion_id,
                "Recorded alternative weights"
            ),
            Err(e) => warn!(
                decision_id = %decision_id,
                criterion_id = %criterion_id,
                error = %e,
                "Failed to record alternative weights"
            ),
        }
    }

    async fn record_final_ranking(
        &self,
        decision_id: &DecisionId,
        alternative_names: &[String],
        ranking: &[RankedAlternative],
    ) {
        match self.save_final(decision_id, alternative_names, ranking).await {
            Ok(()) => debug!(decision_id = %decision_id, "Recorded final ranking"),
            Err(e) => warn!(
                decision_id = %decision_id,
                error = %e,
                "Failed to record final ranking"
            ),
        }
    }
}
