//! Decision command and query handlers.

mod create_decision;
mod get_decision;
mod get_decision_criteria;
mod list_catalog;

pub use create_decision::{CreateDecisionCommand, CreateDecisionHandler, CreateDecisionResult};
pub use get_decision::{GetDecisionHandler, GetDecisionQuery};
pub use get_decision_criteria::{
    DecisionCriteriaView, GetDecisionCriteriaHandler, GetDecisionCriteriaQuery,
};
pub use list_catalog::{ListAlternativesHandler, ListCriteriaHandler};
