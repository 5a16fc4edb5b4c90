//! Calculation recorders.
//!
//! - `RepositoryRecorder` - Saves results through a `DecisionRepository`
//! - `NoopRecorder` - Saves nothing

mod noop_recorder;
mod repository_recorder;

pub use noop_recorder::NoopRecorder;
pub use repository_recorder::RepositoryRecorder;

use std::sync::Arc;

use crate::config::PersistenceConfig;
use crate::ports::{CalculationRecorder, DecisionRepository};

/// Picks the recorder the persistence configuration asks for.
pub fn recorder_for(
    config: &PersistenceConfig,
    repository: Arc<dyn DecisionRepository>,
) -> Arc<dyn CalculationRecorder> {
    if config.record_calculations {
        Arc::new(RepositoryRecorder::new(repository))
    } else {
        Arc::new(NoopRecorder)
    }
}
