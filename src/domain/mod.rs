//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, status, errors)
//! - `ahp` - Pure AHP engine (normalization, consistency, synthesis)
//! - `decision` - Decision problem record with its criteria and alternatives

pub mod ahp;
pub mod decision;
pub mod foundation;
