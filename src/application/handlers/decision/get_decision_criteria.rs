//! GetDecisionCriteriaHandler - Criteria of a decision with computed weights.

use std::sync::Arc;

use crate::domain::foundation::{DecisionId, DomainError};
use crate::ports::{CriterionWeightView, DecisionRepository};

/// Query for a decision's criteria.
#[derive(Debug, Clone)]
pub struct GetDecisionCriteriaQuery {
    pub decision_id: DecisionId,
}

/// Criteria of one decision in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionCriteriaView {
    pub decision_id: DecisionId,
    pub criteria: Vec<CriterionWeightView>,
}

/// Handler for listing a decision's criteria with their weights.
pub struct GetDecisionCriteriaHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl GetDecisionCriteriaHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetDecisionCriteriaQuery,
    ) -> Result<DecisionCriteriaView, DomainError> {
        let criteria = self
            .repository
            .get_criteria_with_weights(&query.decision_id)
            .await?;

        Ok(DecisionCriteriaView {
            decision_id: query.decision_id,
            criteria,
        })
    }
}
