//! In-Memory Decision Repository Adapter
//!
//! Stores decisions, catalogs and calculation results in memory.
//! Useful for testing, development and embedding without a database.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::ahp::ConsistencyReport;
use crate::domain::decision::{Alternative, Criterion, DecisionProblem};
use crate::domain::foundation::{AlternativeId, CriterionId, DecisionId, DecisionStatus};
use crate::ports::{
    AlternativeScore, ComparisonMatrixRecord, CriterionWeightView, DecisionRepository,
    FinalScoreView, RepositoryError,
};

type ScoreKey = (DecisionId, AlternativeId, Option<CriterionId>, bool);

#[derive(Debug, Default)]
struct Store {
    decisions: HashMap<DecisionId, DecisionProblem>,
    criteria: HashMap<String, Criterion>,
    alternatives: HashMap<String, Alternative>,
    matrices: HashMap<(DecisionId, Option<CriterionId>), ComparisonMatrixRecord>,
    criteria_weights: HashMap<(DecisionId, CriterionId), f64>,
    consistency_checks: HashMap<(DecisionId, Option<CriterionId>), ConsistencyReport>,
    scores: HashMap<ScoreKey, AlternativeScore>,
}

impl Store {
    fn require_decision(&self, id: &DecisionId) -> Result<(), RepositoryError> {
        if self.decisions.contains_key(id) {
            Ok(())
        } else {
            Err(RepositoryError::DecisionNotFound(*id))
        }
    }
}

/// In-memory storage for decision problems and their results
#[derive(Debug, Clone, Default)]
pub struct InMemoryDecisionRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryDecisionRepository {
    /// Create a new in-memory repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored comparison matrices
    pub async fn matrix_count(&self) -> usize {
        self.store.read().await.matrices.len()
    }

    /// Get the number of stored consistency checks
    pub async fn consistency_check_count(&self) -> usize {
        self.store.read().await.consistency_checks.len()
    }

    /// Get a stored comparison matrix
    pub async fn comparison_matrix(
        &self,
        decision_id: &DecisionId,
        criterion_id: Option<CriterionId>,
    ) -> Option<ComparisonMatrixRecord> {
        self.store
            .read()
            .await
            .matrices
            .get(&(*decision_id, criterion_id))
            .cloned()
    }

    /// Get stored scores of one criterion, in no particular order
    pub async fn criterion_scores(
        &self,
        decision_id: &DecisionId,
        criterion_id: &CriterionId,
    ) -> Vec<AlternativeScore> {
        self.store
            .read()
            .await
            .scores
            .iter()
            .filter(|((d, _, c, is_final), _)| {
                d == decision_id && c.as_ref() == Some(criterion_id) && !is_final
            })
            .map(|(_, score)| score.clone())
            .collect()
    }
}

fn ensure_by_name<T: Clone>(
    catalog: &mut HashMap<String, T>,
    names: &[String],
    create: impl Fn(&str) -> T,
) -> Result<Vec<T>, RepositoryError> {
    names
        .iter()
        .map(|name| {
            let name = name.trim();
            if name.is_empty() {
                return Err(RepositoryError::InvalidInput(
                    "Catalog names cannot be empty".to_string(),
                ));
            }
            Ok(catalog
                .entry(name.to_string())
                .or_insert_with(|| create(name))
                .clone())
        })
        .collect()
}

#[async_trait]
impl DecisionRepository for InMemoryDecisionRepository {
    async fn create_decision(&self, decision: &DecisionProblem) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        if store.decisions.contains_key(&decision.id) {
            return Err(RepositoryError::InvalidInput(format!(
                "Decision {} already exists",
                decision.id
            )));
        }
        store.decisions.insert(decision.id, decision.clone());
        Ok(())
    }

    async fn get_decision(&self, id: &DecisionId) -> Result<Option<DecisionProblem>, RepositoryError> {
        Ok(self.store.read().await.decisions.get(id).cloned())
    }

    async fn ensure_criteria(&self, names: &[String]) -> Result<Vec<Criterion>, RepositoryError> {
        let mut store = self.store.write().await;
        ensure_by_name(&mut store.criteria, names, |name: &str| Criterion::new(name))
    }

    async fn ensure_alternatives(&self, names: &[String]) -> Result<Vec<Alternative>, RepositoryError> {
        let mut store = self.store.write().await;
        ensure_by_name(&mut store.alternatives, names, |name: &str| Alternative::new(name))
    }

    async fn list_criteria(&self) -> Result<Vec<Criterion>, RepositoryError> {
        let store = self.store.read().await;
        let mut criteria: Vec<_> = store.criteria.values().cloned().collect();
        criteria.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(criteria)
    }

    async fn list_alternatives(&self) -> Result<Vec<Alternative>, RepositoryError> {
        let store = self.store.read().await;
        let mut alternatives: Vec<_> = store.alternatives.values().cloned().collect();
        alternatives.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(alternatives)
    }

    async fn save_comparison_matrix(
        &self,
        decision_id: &DecisionId,
        record: ComparisonMatrixRecord,
    ) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        store.require_decision(decision_id)?;
        store
            .matrices
            .insert((*decision_id, record.scope.criterion_id()), record);
        Ok(())
    }

    async fn save_criteria_weights(
        &self,
        decision_id: &DecisionId,
        weights: &[(CriterionId, f64)],
    ) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        store.require_decision(decision_id)?;
        for (criterion_id, weight) in weights {
            store
                .criteria_weights
                .insert((*decision_id, *criterion_id), *weight);
        }
        Ok(())
    }

    async fn save_consistency_check(
        &self,
        decision_id: &DecisionId,
        criterion_id: Option<CriterionId>,
        report: &ConsistencyReport,
    ) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        store.require_decision(decision_id)?;
        store
            .consistency_checks
            .insert((*decision_id, criterion_id), report.clone());
        Ok(())
    }

    async fn save_alternative_scores(
        &self,
        decision_id: &DecisionId,
        criterion_id: Option<CriterionId>,
        scores: &[AlternativeScore],
        is_final: bool,
    ) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        store.require_decision(decision_id)?;
        for score in scores {
            let key = (*decision_id, score.alternative_id, criterion_id, is_final);
            store.scores.insert(key, score.clone());
        }
        Ok(())
    }

    async fn update_status(
        &self,
        decision_id: &DecisionId,
        status: DecisionStatus,
    ) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        let decision = store
            .decisions
            .get_mut(decision_id)
            .ok_or(RepositoryError::DecisionNotFound(*decision_id))?;
        decision
            .transition_to(status)
            .map_err(|e| RepositoryError::InvalidInput(e.message))
    }

    async fn get_criteria_with_weights(
        &self,
        decision_id: &DecisionId,
    ) -> Result<Vec<CriterionWeightView>, RepositoryError> {
        let store = self.store.read().await;
        let decision = store
            .decisions
            .get(decision_id)
            .ok_or(RepositoryError::DecisionNotFound(*decision_id))?;

        Ok(decision
            .criteria
            .iter()
            .enumerate()
            .map(|(display_order, criterion)| CriterionWeightView {
                id: criterion.id,
                name: criterion.name.clone(),
                description: criterion.description.clone(),
                display_order,
                weight: store
                    .criteria_weights
                    .get(&(*decision_id, criterion.id))
                    .copied(),
            })
            .collect())
    }

    async fn get_consistency_check(
        &self,
        decision_id: &DecisionId,
        criterion_id: Option<CriterionId>,
    ) -> Result<Option<ConsistencyReport>, RepositoryError> {
        let store = self.store.read().await;
        store.require_decision(decision_id)?;
        Ok(store
            .consistency_checks
            .get(&(*decision_id, criterion_id))
            .cloned())
    }

    async fn get_final_scores(
        &self,
        decision_id: &DecisionId,
    ) -> Result<Vec<FinalScoreView>, RepositoryError> {
        let store = self.store.read().await;
        store.require_decision(decision_id)?;

        let names: HashMap<AlternativeId, &str> = store
            .alternatives
            .values()
            .map(|a| (a.id, a.name.as_str()))
            .collect();

        let mut scores: Vec<FinalScoreView> = store
            .scores
            .iter()
            .filter(|((d, _, c, is_final), _)| d == decision_id && c.is_none() && *is_final)
            .map(|(_, score)| FinalScoreView {
                alternative_id: score.alternative_id,
                name: names
                    .get(&score.alternative_id)
                    .map(|n| n.to_string())
                    .unwrap_or_default(),
                score: score.score,
                rank: score.rank,
            })
            .collect();
        scores.sort_by_key(|s| s.rank.unwrap_or(usize::MAX));
        Ok(scores)
    }
}
