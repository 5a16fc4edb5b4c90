//! Decision Repository Port - persistence contract for decisions and results.
//!
//! Stored values are keyed by (decision, criterion or none, alternative or
//! none, is-final). A `None` criterion refers to the criteria matrix itself
//! or to the final synthesis.

use async_trait::async_trait;

use crate::domain::ahp::{ConsistencyReport, PairwiseComparisonMatrix};
use crate::domain::decision::{Alternative, Criterion, DecisionProblem};
use crate::domain::foundation::{
    AlternativeId, CriterionId, DecisionId, DecisionStatus, DomainError, ErrorCode,
};

/// Errors that can occur during repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Decision not found: {0}")]
    DecisionNotFound(DecisionId),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<RepositoryError> for DomainError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DecisionNotFound(id) => DomainError::new(
                ErrorCode::DecisionNotFound,
                format!("Decision problem with ID {} not found", id),
            )
            .with_detail("decision_id", id.to_string()),
            RepositoryError::InvalidInput(msg) => DomainError::new(ErrorCode::ValidationFailed, msg),
            RepositoryError::Storage(msg) => DomainError::new(
                ErrorCode::DatabaseError,
                format!("Database error: {}", msg),
            ),
        }
    }
}

/// Which items a stored comparison matrix compares.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixScope {
    /// Criteria compared against each other, in row order.
    Criteria { criterion_ids: Vec<CriterionId> },
    /// Alternatives compared under one criterion, in row order.
    Alternatives {
        criterion_id: CriterionId,
        alternative_ids: Vec<AlternativeId>,
    },
}

impl MatrixScope {
    /// The criterion this matrix belongs to, `None` for the criteria matrix.
    pub fn criterion_id(&self) -> Option<CriterionId> {
        match self {
            MatrixScope::Criteria { .. } => None,
            MatrixScope::Alternatives { criterion_id, .. } => Some(*criterion_id),
        }
    }
}

/// A raw comparison matrix as submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonMatrixRecord {
    pub scope: MatrixScope,
    pub matrix: PairwiseComparisonMatrix,
}

/// Score of one alternative, per criterion or final.
#[derive(Debug, Clone, PartialEq)]
pub struct AlternativeScore {
    pub alternative_id: AlternativeId,
    pub score: f64,
    /// Present only for final scores.
    pub rank: Option<usize>,
}

/// A criterion of a decision with its computed weight, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct CriterionWeightView {
    pub id: CriterionId,
    pub name: String,
    pub description: Option<String>,
    pub display_order: usize,
    pub weight: Option<f64>,
}

/// A stored final score joined with the alternative's name.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalScoreView {
    pub alternative_id: AlternativeId,
    pub name: String,
    pub score: f64,
    pub rank: Option<usize>,
}

/// Port for persisting decision problems and their calculation results.
#[async_trait]
pub trait DecisionRepository: Send + Sync {
    /// Stores a new decision with its criteria and alternative links.
    async fn create_decision(&self, decision: &DecisionProblem) -> Result<(), RepositoryError>;

    /// Loads a decision, `None` if it does not exist.
    async fn get_decision(&self, id: &DecisionId) -> Result<Option<DecisionProblem>, RepositoryError>;

    /// Returns catalog criteria for the names, creating missing ones.
    /// Output order matches input order.
    async fn ensure_criteria(&self, names: &[String]) -> Result<Vec<Criterion>, RepositoryError>;

    /// Returns catalog alternatives for the names, creating missing ones.
    /// Output order matches input order.
    async fn ensure_alternatives(&self, names: &[String]) -> Result<Vec<Alternative>, RepositoryError>;

    /// All catalog criteria, ordered by name.
    async fn list_criteria(&self) -> Result<Vec<Criterion>, RepositoryError>;

    /// All catalog alternatives, ordered by name.
    async fn list_alternatives(&self) -> Result<Vec<Alternative>, RepositoryError>;

    /// Upserts a raw comparison matrix.
    async fn save_comparison_matrix(
        &self,
        decision_id: &DecisionId,
        record: ComparisonMatrixRecord,
    ) -> Result<(), RepositoryError>;

    /// Upserts criteria weights.
    async fn save_criteria_weights(
        &self,
        decision_id: &DecisionId,
        weights: &[(CriterionId, f64)],
    ) -> Result<(), RepositoryError>;

    /// Upserts the consistency check of the criteria matrix (`None`) or of
    /// one criterion's alternatives matrix.
    async fn save_consistency_check(
        &self,
        decision_id: &DecisionId,
        criterion_id: Option<CriterionId>,
        report: &ConsistencyReport,
    ) -> Result<(), RepositoryError>;

    /// Upserts alternative scores under a criterion, or final scores when
    /// `is_final` is set.
    async fn save_alternative_scores(
        &self,
        decision_id: &DecisionId,
        criterion_id: Option<CriterionId>,
        scores: &[AlternativeScore],
        is_final: bool,
    ) -> Result<(), RepositoryError>;

    /// Sets the decision status.
    async fn update_status(
        &self,
        decision_id: &DecisionId,
        status: DecisionStatus,
    ) -> Result<(), RepositoryError>;

    /// Criteria of a decision in display order, joined with stored weights.
    async fn get_criteria_with_weights(
        &self,
        decision_id: &DecisionId,
    ) -> Result<Vec<CriterionWeightView>, RepositoryError>;

    /// Stored consistency check for the criteria matrix or a criterion.
    async fn get_consistency_check(
        &self,
        decision_id: &DecisionId,
        criterion_id: Option<CriterionId>,
    ) -> Result<Option<ConsistencyReport>, RepositoryError>;

    /// Stored final scores ordered by rank.
    async fn get_final_scores(
        &self,
        decision_id: &DecisionId,
    ) -> Result<Vec<FinalScoreView>, RepositoryError>;
}
