//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates the AHP engine and coordinates between ports.
//! Calculation handlers hand results to a `CalculationRecorder`; query
//! handlers read through the `DecisionRepository`.

pub mod handlers;

pub use handlers::{
    // Decision handlers
    CreateDecisionCommand, CreateDecisionHandler, CreateDecisionResult,
    DecisionCriteriaView, GetDecisionCriteriaHandler, GetDecisionCriteriaQuery,
    GetDecisionHandler, GetDecisionQuery,
    ListAlternativesHandler, ListCriteriaHandler,
    // AHP handlers
    CalculateFinalRankingCommand, CalculateFinalRankingHandler,
    ComputeAlternativeWeightsCommand, ComputeAlternativeWeightsHandler,
    ComputeCriteriaWeightsCommand, ComputeCriteriaWeightsHandler,
    RankAlternativesCommand, RankAlternativesHandler,
};
