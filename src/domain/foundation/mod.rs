//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, status enums and error types
//! that form the vocabulary of the decision domain.

mod decision_status;
mod errors;
mod ids;
mod timestamp;

pub use decision_status::DecisionStatus;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AlternativeId, CriterionId, DecisionId};
pub use timestamp::Timestamp;
