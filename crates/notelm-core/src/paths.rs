//! Skill filesystem layout: root directory and derived locations.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Locations the launcher consumes under the skill root. Immutable for the
/// process lifetime; the root is derived from the launcher's own location,
/// never from configuration.
#[derive(Debug, Clone)]
pub struct SkillPaths {
    /// Root directory of the skill.
    pub skill_dir: PathBuf,
    /// Directory holding the dispatchable scripts.
    pub scripts_dir: PathBuf,
    /// Optional dependency manifest; absence is not an error.
    pub requirements_file: PathBuf,
}

impl SkillPaths {
    pub fn new(skill_dir: impl Into<PathBuf>) -> Self {
        let skill_dir = skill_dir.into();
        let scripts_dir = skill_dir.join("scripts");
        let requirements_file = skill_dir.join("requirements.txt");
        Self {
            skill_dir,
            scripts_dir,
            requirements_file,
        }
    }

    /// Derive the skill root from the launcher executable's location.
    /// The binary is installed at the skill root, next to `scripts/`.
    pub fn from_exe() -> Result<Self> {
        let exe = std::env::current_exe().context("Locate launcher executable")?;
        let dir = exe
            .parent()
            .context("Launcher executable has no parent directory")?;
        Ok(Self::new(dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_locations_sit_under_the_root() {
        let paths = SkillPaths::new("/opt/notelm");
        assert_eq!(paths.scripts_dir, PathBuf::from("/opt/notelm/scripts"));
        assert_eq!(
            paths.requirements_file,
            PathBuf::from("/opt/notelm/requirements.txt")
        );
    }

    #[test]
    fn from_exe_resolves_a_directory() {
        let paths = SkillPaths::from_exe().unwrap();
        assert!(paths.skill_dir.is_dir());
    }
}
