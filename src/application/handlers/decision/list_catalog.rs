//! Catalog query handlers - every known criterion and alternative.

use std::sync::Arc;

use crate::domain::decision::{Alternative, Criterion};
use crate::domain::foundation::DomainError;
use crate::ports::DecisionRepository;

/// Handler listing all catalog criteria by name.
pub struct ListCriteriaHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl ListCriteriaHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Criterion>, DomainError> {
        Ok(self.repository.list_criteria().await?)
    }
}

/// Handler listing all catalog alternatives by name.
pub struct ListAlternativesHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl ListAlternativesHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Alternative>, DomainError> {
        Ok(self.repository.list_alternatives().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryDecisionRepository;

    #[tokio::test]
    async fn lists_both_catalogs_sorted() {
        let repo = Arc::new(InMemoryDecisionRepository::new());
        repo.ensure_criteria(&["Speed".to_string(), "Cost".to_string()])
            .await
            .unwrap();
        repo.ensure_alternatives(&["Train".to_string()]).await.unwrap();

        let criteria = ListCriteriaHandler::new(repo.clone()).handle().await.unwrap();
        let alternatives = ListAlternativesHandler::new(repo).handle().await.unwrap();

        assert_eq!(criteria[0].name, "Cost");
        assert_eq!(criteria[1].name, "Speed");
        assert_eq!(alternatives.len(), 1);
    }
}
