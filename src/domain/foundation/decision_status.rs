//! DecisionStatus enum for tracking the lifecycle of a decision problem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a decision problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    #[default]
    InProgress,
    Completed,
}

impl DecisionStatus {
    /// Validates a transition from this status to another.
    ///
    /// Valid transitions:
    /// - InProgress -> Completed
    /// - Completed -> Completed (re-ranking a finished decision)
    pub fn can_transition_to(&self, target: &DecisionStatus) -> bool {
        use DecisionStatus::*;
        matches!((self, target), (InProgress, Completed) | (Completed, Completed))
    }

    /// Returns the storage/wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionStatus::InProgress => "in_progress",
            DecisionStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
