//! Decision module - the decision problem record and its catalog entries.

mod aggregate;

pub use aggregate::{Alternative, Criterion, DecisionProblem};
