//! Calculation Recorder Port - where computed results are handed off.
//!
//! Recording is fire-and-forget: implementations never fail the caller,
//! so a storage outage cannot invalidate a numeric result that was already
//! computed. Which implementation is wired decides whether anything is saved.

use async_trait::async_trait;

use crate::domain::ahp::{MatrixEvaluation, RankedAlternative};
use crate::domain::foundation::{CriterionId, DecisionId};

/// Sink for completed calculations.
#[async_trait]
pub trait CalculationRecorder: Send + Sync {
    /// Records the criteria matrix, its weights and its consistency check.
    async fn record_criteria_weights(
        &self,
        decision_id: &DecisionId,
        criteria_names: &[String],
        evaluation: &MatrixEvaluation,
    );

    /// Records one criterion's alternatives matrix, scores and consistency.
    async fn record_alternative_weights(
        &self,
        decision_id: &DecisionId,
        criterion_id: &CriterionId,
        alternative_names: &[String],
        evaluation: &MatrixEvaluation,
    );

    /// Records final scores and marks the decision completed.
    async fn record_final_ranking(
        &self,
        decision_id: &DecisionId,
        alternative_names: &[String],
        ranking: &[RankedAlternative],
    );
}
