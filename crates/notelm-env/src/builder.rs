//! First-run provisioning of the skill-local Python virtual environment.
//!
//! The venv directory's existence is the sole idempotency signal: once it is
//! present the environment is assumed complete and nothing is re-verified.
//! A fatal failure leaves any partial state in place; the operator removes
//! the venv directory and re-runs.

use anyhow::{Context, Result};
use notelm_core::paths::SkillPaths;
use notelm_core::status;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Interpreter and installer locations inside the venv. The layout differs
/// between Windows (`Scripts\`) and POSIX (`bin/`) hosts.
#[derive(Debug, Clone)]
pub struct VenvPaths {
    pub venv_dir: PathBuf,
    pub python: PathBuf,
    pub pip: PathBuf,
}

impl VenvPaths {
    pub fn new(skill_dir: &Path) -> Self {
        let venv_dir = skill_dir.join(".venv");

        #[cfg(target_os = "windows")]
        let (python, pip) = (
            venv_dir.join("Scripts").join("python.exe"),
            venv_dir.join("Scripts").join("pip.exe"),
        );
        #[cfg(not(target_os = "windows"))]
        let (python, pip) = (
            venv_dir.join("bin").join("python"),
            venv_dir.join("bin").join("pip"),
        );

        Self {
            venv_dir,
            python,
            pip,
        }
    }
}

/// Ensure the virtual environment exists and is set up.
///
/// Linear pipeline with early exit on fatal error: existence check, venv
/// creation, dependency installation (when `requirements.txt` is present),
/// then a best-effort Chrome install for Patchright.
pub fn ensure_ready(venv: &VenvPaths, skill: &SkillPaths) -> Result<()> {
    if venv.venv_dir.exists() {
        tracing::debug!(venv = %venv.venv_dir.display(), "environment already provisioned");
        return Ok(());
    }

    println!("🔧 First-time setup: Creating virtual environment...");
    println!("   This may take a minute...");

    create_venv(venv, skill)?;

    if skill.requirements_file.exists() {
        install_dependencies(venv, skill)?;
        install_browser(venv, skill);
    }

    println!();
    status::print_success("Environment ready!");
    println!("   Virtual env: {}", venv.venv_dir.display());
    println!("   Python: {}", venv.python.display());
    Ok(())
}

fn create_venv(venv: &VenvPaths, skill: &SkillPaths) -> Result<()> {
    if let Some(name) = venv.venv_dir.file_name() {
        println!("🔧 Creating virtual environment in {}/", name.to_string_lossy());
    }

    let python = which_python()?;
    let mut cmd = Command::new(&python);
    cmd.arg("-m")
        .arg("venv")
        .arg(&venv.venv_dir)
        .current_dir(&skill.skill_dir);
    run_captured(cmd, "venv creation")?;

    status::print_success("Virtual environment created");
    Ok(())
}

fn install_dependencies(venv: &VenvPaths, skill: &SkillPaths) -> Result<()> {
    println!("📦 Installing dependencies...");

    let mut upgrade = Command::new(&venv.pip);
    upgrade
        .args(["install", "--upgrade", "pip"])
        .current_dir(&skill.skill_dir);
    run_captured(upgrade, "pip self-upgrade")?;

    let mut install = Command::new(&venv.pip);
    install
        .arg("install")
        .arg("-r")
        .arg(&skill.requirements_file)
        .current_dir(&skill.skill_dir);
    run_captured(install, "dependency installation")?;

    status::print_success("Dependencies installed");
    Ok(())
}

/// Install the Chrome binary Patchright drives. Non-fatal: the scripts can
/// only fail later at browser launch, so a warning with the manual command
/// is enough here.
fn install_browser(venv: &VenvPaths, skill: &SkillPaths) {
    println!("🌐 Installing Google Chrome for Patchright...");

    let result = Command::new(&venv.python)
        .args(["-m", "patchright", "install", "chrome"])
        .current_dir(&skill.skill_dir)
        .stdin(Stdio::null())
        .output();

    match result {
        Ok(out) if out.status.success() => status::print_success("Chrome installed"),
        Ok(out) => {
            tracing::warn!(
                stderr = %String::from_utf8_lossy(&out.stderr).trim(),
                "patchright chrome install failed"
            );
            status::print_warning(
                "Chrome install failed. Run manually: python -m patchright install chrome",
            );
        }
        Err(err) => {
            tracing::warn!(error = %err, "patchright chrome install failed to spawn");
            status::print_warning(
                "Chrome install failed. Run manually: python -m patchright install chrome",
            );
        }
    }
}

/// Run a non-interactive subprocess with fully captured output. On a
/// non-zero exit the captured stderr (decoded with lossy UTF-8 substitution)
/// is surfaced in the error.
fn run_captured(mut cmd: Command, what: &str) -> Result<()> {
    let out = cmd
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("Failed to spawn {what}"))?;
    if !out.status.success() {
        let stderr = String::from_utf8_lossy(&out.stderr);
        anyhow::bail!("{what} failed: {}", stderr.trim());
    }
    Ok(())
}

fn which_python() -> Result<PathBuf> {
    for name in ["python3", "python"] {
        let found = Command::new(name)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false);
        if found {
            return Ok(PathBuf::from(name));
        }
    }
    anyhow::bail!("python3 or python not found in PATH")
}
