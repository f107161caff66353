//! Environment variable key constants.

pub const NOTELM_QUIET: &str = "NOTELM_QUIET";
pub const NOTELM_LOG_LEVEL: &str = "NOTELM_LOG_LEVEL";
pub const NOTELM_LOG_JSON: &str = "NOTELM_LOG_JSON";

/// Instructs child Python interpreters to use UTF-8 standard streams.
/// Set by the console normalizer on Windows and inherited by every script.
pub const PYTHONIOENCODING: &str = "PYTHONIOENCODING";
