//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory decision repository
//! - `recording` - Calculation recorders wired in front of the repository

pub mod memory;
pub mod recording;

pub use memory::InMemoryDecisionRepository;
pub use recording::{recorder_for, NoopRecorder, RepositoryRecorder};
