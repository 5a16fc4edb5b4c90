//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod ahp;
pub mod decision;

pub use ahp::{
    CalculateFinalRankingCommand, CalculateFinalRankingHandler, ComputeAlternativeWeightsCommand,
    ComputeAlternativeWeightsHandler, ComputeCriteriaWeightsCommand,
    ComputeCriteriaWeightsHandler, RankAlternativesCommand, RankAlternativesHandler,
};
pub use decision::{
    CreateDecisionCommand, CreateDecisionHandler, CreateDecisionResult, DecisionCriteriaView,
    GetDecisionCriteriaHandler, GetDecisionCriteriaQuery, GetDecisionHandler, GetDecisionQuery,
    ListAlternativesHandler, ListCriteriaHandler,
};
