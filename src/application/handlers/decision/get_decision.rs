//! GetDecisionHandler - Query handler for loading a decision problem.

use std::sync::Arc;

use crate::domain::decision::DecisionProblem;
use crate::domain::foundation::{DecisionId, DomainError};
use crate::ports::{DecisionRepository, RepositoryError};

/// Query for a single decision problem.
#[derive(Debug, Clone)]
pub struct GetDecisionQuery {
    pub decision_id: DecisionId,
}

/// Handler for loading decision problems.
///
/// Fails closed: a missing decision is an error, never an empty result.
pub struct GetDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl GetDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetDecisionQuery) -> Result<DecisionProblem, DomainError> {
        self.repository
            .get_decision(&query.decision_id)
            .await?
            .ok_or_else(|| RepositoryError::DecisionNotFound(query.decision_id).into())
    }
}
