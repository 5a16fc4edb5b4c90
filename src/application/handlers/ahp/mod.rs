//! AHP calculation handlers.

mod calculate_final_ranking;
mod compute_alternative_weights;
mod compute_criteria_weights;
mod rank_alternatives;

pub use calculate_final_ranking::{CalculateFinalRankingCommand, CalculateFinalRankingHandler};
pub use compute_alternative_weights::{
    ComputeAlternativeWeightsCommand, ComputeAlternativeWeightsHandler,
};
pub use compute_criteria_weights::{ComputeCriteriaWeightsCommand, ComputeCriteriaWeightsHandler};
pub use rank_alternatives::{RankAlternativesCommand, RankAlternativesHandler};

use tracing::{debug, warn};

use crate::domain::ahp::{AhpError, MatrixEvaluation};
use crate::domain::foundation::{DecisionId, DomainError};

/// Maps an engine error onto a domain error naming the failing matrix.
fn matrix_error(matrix: &str) -> impl Fn(AhpError) -> DomainError + '_ {
    move |err| DomainError::from(err).with_detail("matrix", matrix)
}

fn log_evaluation(decision_id: Option<&DecisionId>, evaluation: &MatrixEvaluation) {
    let report = &evaluation.consistency_check;
    let decision_id = decision_id.map(ToString::to_string).unwrap_or_default();
    if report.is_consistent {
        debug!(
            decision_id = %decision_id,
            step = %evaluation.step_name,
            n = evaluation.order(),
            cr = report.cr,
            "Matrix evaluated"
        );
    } else {
        warn!(
            decision_id = %decision_id,
            step = %evaluation.step_name,
            n = evaluation.order(),
            cr = report.cr,
            "Inconsistent comparison matrix"
        );
    }
}
