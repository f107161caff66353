//! Script name resolution.
//!
//! A user may name a script with or without the `scripts/` prefix and with or
//! without the `.py` suffix; all spellings resolve to the same path.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Scripts shipped with the skill, listed in the usage output.
pub const KNOWN_SCRIPTS: &[(&str, &str)] = &[
    ("ask_question.py", "Query NotebookLM"),
    ("notebook_manager.py", "Manage notebook library"),
    ("auth_manager.py", "Handle authentication"),
    ("cleanup_manager.py", "Clean up skill data"),
];

pub const SCRIPT_SUFFIX: &str = ".py";
const SCRIPTS_PREFIX: &str = "scripts/";

/// Errors returned by script resolution.
#[derive(Debug, Error)]
pub enum ScriptResolveError {
    #[error("Script not found: {0}")]
    NotFound(String),
}

/// Normalize a user-supplied script name to its canonical filename:
/// strip a leading `scripts/` prefix, append `.py` when missing.
pub fn canonical_script_name(name: &str) -> String {
    let name = name.strip_prefix(SCRIPTS_PREFIX).unwrap_or(name);
    if name.ends_with(SCRIPT_SUFFIX) {
        name.to_string()
    } else {
        format!("{name}{SCRIPT_SUFFIX}")
    }
}

/// Resolve a script name to its path under `scripts/`, verifying it exists.
/// No fuzzy matching: an unknown name is reported as-is.
pub fn resolve_script(scripts_dir: &Path, name: &str) -> Result<PathBuf, ScriptResolveError> {
    let canonical = canonical_script_name(name);
    let path = scripts_dir.join(&canonical);
    if !path.exists() {
        return Err(ScriptResolveError::NotFound(canonical));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn all_spellings_share_one_canonical_name() {
        for name in ["foo", "scripts/foo", "foo.py", "scripts/foo.py"] {
            assert_eq!(canonical_script_name(name), "foo.py", "{name}");
        }
    }

    #[test]
    fn prefix_is_only_stripped_at_the_start() {
        assert_eq!(canonical_script_name("my_scripts/foo"), "my_scripts/foo.py");
    }

    #[test]
    fn resolves_existing_script_for_every_spelling() {
        let dir = tempfile::tempdir().unwrap();
        let scripts = dir.path().join("scripts");
        fs::create_dir(&scripts).unwrap();
        fs::write(scripts.join("foo.py"), "print('hi')\n").unwrap();

        let expected = scripts.join("foo.py");
        for name in ["foo", "scripts/foo", "foo.py"] {
            assert_eq!(resolve_script(&scripts, name).unwrap(), expected, "{name}");
        }
    }

    #[test]
    fn missing_script_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let scripts = dir.path().join("scripts");
        fs::create_dir(&scripts).unwrap();

        let err = resolve_script(&scripts, "missing").unwrap_err();
        assert_eq!(err.to_string(), "Script not found: missing.py");
    }
}
