//! Tracing subscriber setup.

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Builds the filter: `RUST_LOG` wins when set and parseable, otherwise the
/// configured directive.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Initialize tracing for the process.
///
/// Returns `false` if a global subscriber was already installed, which is
/// common when several tests initialize tracing.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(config));

    let installed = if config.json {
        builder.json().with_current_span(false).try_init().is_ok()
    } else {
        builder.with_target(true).try_init().is_ok()
    };

    if installed {
        debug!(json = config.json, level = %config.level, "Tracing initialized");
    }
    installed
}
