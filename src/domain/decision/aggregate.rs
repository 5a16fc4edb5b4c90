//! DecisionProblem - the stored record a set of calculations belongs to.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AlternativeId, CriterionId, DecisionId, DecisionStatus, DomainError, ErrorCode, Timestamp,
    ValidationError,
};

/// A criterion from the shared catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub name: String,
    pub description: Option<String>,
}

impl Criterion {
    /// Creates a catalog criterion with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CriterionId::new(),
            name: name.into(),
            description: None,
        }
    }
}

/// An alternative from the shared catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: AlternativeId,
    pub name: String,
    pub description: Option<String>,
}

impl Alternative {
    /// Creates a catalog alternative with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: AlternativeId::new(),
            name: name.into(),
            description: None,
        }
    }
}

/// A decision problem: ordered criteria and alternatives plus a status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionProblem {
    pub id: DecisionId,
    pub title: String,
    pub description: Option<String>,
    pub status: DecisionStatus,
    /// Criteria in display order.
    pub criteria: Vec<Criterion>,
    /// Alternatives in display order.
    pub alternatives: Vec<Alternative>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DecisionProblem {
    /// Creates a new in-progress decision problem.
    ///
    /// # Errors
    /// `ValidationError` if the title is blank or either list is empty.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        criteria: Vec<Criterion>,
        alternatives: Vec<Alternative>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if criteria.is_empty() {
            return Err(ValidationError::too_few("criteria", 1, 0));
        }
        if alternatives.is_empty() {
            return Err(ValidationError::too_few("alternatives", 1, 0));
        }

        let now = Timestamp::now();
        Ok(Self {
            id: DecisionId::new(),
            title,
            description,
            status: DecisionStatus::InProgress,
            criteria,
            alternatives,
            created_at: now,
            updated_at: now,
        })
    }

    /// Criterion names in display order.
    pub fn criteria_names(&self) -> Vec<String> {
        self.criteria.iter().map(|c| c.name.clone()).collect()
    }

    /// Alternative names in display order.
    pub fn alternative_names(&self) -> Vec<String> {
        self.alternatives.iter().map(|a| a.name.clone()).collect()
    }

    /// Moves the decision to `target`, enforcing valid transitions.
    pub fn transition_to(&mut self, target: DecisionStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(&target) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot move decision from {} to {}", self.status, target),
            )
            .with_detail("decision_id", self.id.to_string()));
        }
        self.status = target;
        self.updated_at = Timestamp::now();
        Ok(())
    }
}
