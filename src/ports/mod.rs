//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DecisionRepository` - Decision problems, catalogs and stored results
//! - `CalculationRecorder` - Fire-and-forget hand-off of computed results

mod calculation_recorder;
mod decision_repository;

pub use calculation_recorder::CalculationRecorder;
pub use decision_repository::{
    AlternativeScore, ComparisonMatrixRecord, CriterionWeightView, DecisionRepository,
    FinalScoreView, MatrixScope, RepositoryError,
};
