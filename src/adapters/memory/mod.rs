//! In-memory adapters.

mod in_memory_decision_repository;

pub use in_memory_decision_repository::InMemoryDecisionRepository;
