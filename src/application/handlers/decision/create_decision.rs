//! CreateDecisionHandler - Command handler for creating decision problems.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::decision::DecisionProblem;
use crate::domain::foundation::{DomainError, ValidationError};
use crate::ports::DecisionRepository;

/// Command to create a new decision problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDecisionCommand {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub criteria: Vec<String>,
    pub alternatives: Vec<String>,
}

/// Result of successful decision creation.
pub type CreateDecisionResult = DecisionProblem;

/// Handler for creating decision problems.
pub struct CreateDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl CreateDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateDecisionCommand,
    ) -> Result<CreateDecisionResult, DomainError> {
        // 1. Validate names before touching the catalog
        let criteria_names = clean_names("criteria", &cmd.criteria)?;
        let alternative_names = clean_names("alternatives", &cmd.alternatives)?;

        // 2. Resolve catalog entries (get-or-create by name)
        let criteria = self.repository.ensure_criteria(&criteria_names).await?;
        let alternatives = self.repository.ensure_alternatives(&alternative_names).await?;

        // 3. Build and persist the decision
        let decision = DecisionProblem::new(cmd.title, cmd.description, criteria, alternatives)?;
        self.repository.create_decision(&decision).await?;

        info!(
            decision_id = %decision.id,
            criteria = decision.criteria.len(),
            alternatives = decision.alternatives.len(),
            "Created decision problem"
        );

        Ok(decision)
    }
}

fn clean_names(field: &str, names: &[String]) -> Result<Vec<String>, ValidationError> {
    if names.is_empty() {
        return Err(ValidationError::too_few(field, 1, 0));
    }

    let mut seen = HashSet::new();
    names
        .iter()
        .map(|name| {
            let name = name.trim();
            if name.is_empty() {
                return Err(ValidationError::empty_field(field));
            }
            if !seen.insert(name.to_string()) {
                return Err(ValidationError::invalid_format(
                    field,
                    format!("duplicate name '{}'", name),
                ));
            }
            Ok(name.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryDecisionRepository;
    use crate::domain::foundation::{DecisionStatus, ErrorCode};

    fn command(criteria: &[&str], alternatives: &[&str]) -> CreateDecisionCommand {
        CreateDecisionCommand {
            title: "Choose a supplier".to_string(),
            description: Some("Q3 sourcing".to_string()),
            criteria: criteria.iter().map(|s| s.to_string()).collect(),
            alternatives: alternatives.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn creates_decision_in_display_order() {
        let repo = Arc::new(InMemoryDecisionRepository::new());
        let handler = CreateDecisionHandler::new(repo.clone());

        let decision = handler
            .handle(command(&["Price", "Lead time"], &["Acme", "Globex", "Initech"]))
            .await
            .unwrap();

        assert_eq!(decision.status, DecisionStatus::InProgress);
        assert_eq!(decision.criteria_names(), vec!["Price", "Lead time"]);
        assert_eq!(decision.alternative_names(), vec!["Acme", "Globex", "Initech"]);
        assert!(repo.get_decision(&decision.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn reuses_catalog_entries_across_decisions() {
        let repo = Arc::new(InMemoryDecisionRepository::new());
        let handler = CreateDecisionHandler::new(repo.clone());

        let first = handler.handle(command(&["Price"], &["Acme"])).await.unwrap();
        let second = handler.handle(command(&["Price"], &["Acme"])).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.criteria[0].id, second.criteria[0].id);
        assert_eq!(repo.list_criteria().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn trims_names() {
        let repo = Arc::new(InMemoryDecisionRepository::new());
        let handler = CreateDecisionHandler::new(repo);

        let decision = handler.handle(command(&["  Price "], &["Acme"])).await.unwrap();
        assert_eq!(decision.criteria_names(), vec!["Price"]);
    }

    #[tokio::test]
    async fn rejects_empty_criteria() {
        let handler = CreateDecisionHandler::new(Arc::new(InMemoryDecisionRepository::new()));
        let err = handler.handle(command(&[], &["Acme"])).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field"), Some(&"criteria".to_string()));
    }

    #[tokio::test]
    async fn rejects_duplicate_alternatives() {
        let handler = CreateDecisionHandler::new(Arc::new(InMemoryDecisionRepository::new()));
        let err = handler
            .handle(command(&["Price"], &["Acme", "Acme"]))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.message.contains("duplicate"));
    }

    #[tokio::test]
    async fn rejects_blank_title() {
        let handler = CreateDecisionHandler::new(Arc::new(InMemoryDecisionRepository::new()));
        let mut cmd = command(&["Price"], &["Acme"]);
        cmd.title = String::new();

        let err = handler.handle(cmd).await.unwrap_err();
        assert_eq!(err.details.get("field"), Some(&"title".to_string()));
    }
}
