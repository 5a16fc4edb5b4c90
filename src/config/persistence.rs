//! Persistence configuration

use serde::Deserialize;

/// Controls whether calculation results are written to the repository
#[derive(Debug, Clone, Deserialize)]
pub struct PersistenceConfig {
    /// Record matrices, weights, consistency checks and final scores
    #[serde(default = "default_record_calculations")]
    pub record_calculations: bool,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            record_calculations: default_record_calculations(),
        }
    }
}

fn default_record_calculations() -> bool {
    true
}
