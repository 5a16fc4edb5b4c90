//! Recorder that keeps nothing, for stateless evaluation.

use async_trait::async_trait;
use tracing::trace;

use crate::domain::ahp::{MatrixEvaluation, RankedAlternative};
use crate::domain::foundation::{CriterionId, DecisionId};
use crate::ports::CalculationRecorder;

/// Discards every calculation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRecorder;

#[async_trait]
impl CalculationRecorder for NoopRecorder {
    async fn record_criteria_weights(
        &self,
        decision_id: &DecisionId,
        _criteria_names: &[String],
        _evaluation: &MatrixEvaluation,
    ) {
        trace!(decision_id = %decision_id, "Recording disabled, criteria weights not saved");
    }

    async fn record_alternative_weights(
        &self,
        decision_id: &DecisionId,
        _criterion_id: &CriterionId,
        _alternative_names: &[String],
        _evaluation: &MatrixEvaluation,
    ) {
        trace!(decision_id = %decision_id, "Recording disabled, alternative weights not saved");
    }

    async fn record_final_ranking(
        &self,
        decision_id: &DecisionId,
        _alternative_names: &[String],
        _ranking: &[RankedAlternative],
    ) {
        trace!(decision_id = %decision_id, "Recording disabled, final ranking not saved");
    }
}
