//! Config structs loaded from environment variables.

use super::env_keys;
use super::loader::{env_bool, env_or};

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// When set, only WARN and above are logged.
    pub quiet: bool,
    /// Default tracing filter when RUST_LOG is not set.
    pub log_level: String,
    /// Emit log records as JSON lines.
    pub log_json: bool,
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self {
            quiet: env_bool(env_keys::NOTELM_QUIET, false),
            log_level: env_or(env_keys::NOTELM_LOG_LEVEL, || "notelm=info".to_string()),
            log_json: env_bool(env_keys::NOTELM_LOG_JSON, false),
        }
    }
}
