//! Script dispatch: resolve the requested script, provision the environment,
//! run the script inside it, and propagate its exit code.

use anyhow::{Context, Result};
use notelm_core::paths::SkillPaths;
use notelm_core::resolve::{self, KNOWN_SCRIPTS};
use notelm_core::status;
use notelm_env::builder::{self, VenvPaths};
use std::path::Path;
use std::process::{Child, Command};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Conventional exit code for a SIGINT-terminated run.
pub const EXIT_INTERRUPTED: i32 = 130;

pub fn print_usage() {
    println!("Usage: notelm <script-name> [args...]");
    println!();
    println!("Available scripts:");
    for (name, description) in KNOWN_SCRIPTS {
        println!("  {name:<19} - {description}");
    }
}

/// Run the named script inside the skill environment. Returns the exit code
/// for `main` to propagate; every failure is reported here, never raised.
pub fn dispatch(script_name: &str, script_args: &[String]) -> i32 {
    match try_dispatch(script_name, script_args) {
        Ok(code) => code,
        Err(err) => {
            status::print_error(&format!("{err:#}"));
            1
        }
    }
}

fn try_dispatch(script_name: &str, script_args: &[String]) -> Result<i32> {
    let skill = SkillPaths::from_exe()?;
    let script_path = resolve::resolve_script(&skill.scripts_dir, script_name)?;

    let venv = VenvPaths::new(&skill.skill_dir);
    builder::ensure_ready(&venv, &skill).context("Failed to set up environment")?;

    run_script(&venv, &script_path, script_args)
}

fn run_script(venv: &VenvPaths, script_path: &Path, args: &[String]) -> Result<i32> {
    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let interrupted = interrupted.clone();
        ctrlc::set_handler(move || {
            interrupted.store(true, Ordering::SeqCst);
        })
        .context("Failed to set Ctrl+C handler")?;
    }

    tracing::debug!(script = %script_path.display(), ?args, "dispatching script");

    // Stdio is inherited (the script's output appears live), as is the full
    // parent environment, PYTHONIOENCODING included.
    let child = Command::new(&venv.python)
        .arg(script_path)
        .args(args)
        .spawn()
        .with_context(|| format!("Failed to spawn {}", script_path.display()))?;

    wait_for_child(child, &interrupted)
}

/// Wait for the child and map its termination to an exit code. An interrupt
/// already reached the child; nothing further is killed or waited on.
fn wait_for_child(mut child: Child, interrupted: &AtomicBool) -> Result<i32> {
    let exit = child.wait().context("Failed to wait for script")?;

    if interrupted.load(Ordering::SeqCst) {
        println!();
        status::print_warning("Interrupted by user");
        return Ok(EXIT_INTERRUPTED);
    }

    // A signal-terminated child has no code; that is a launcher-level failure.
    Ok(exit.code().unwrap_or(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn spawn_sh(cmd: &str) -> Child {
        Command::new("sh").args(["-c", cmd]).spawn().unwrap()
    }

    #[cfg(unix)]
    #[test]
    fn child_exit_code_is_propagated() {
        let flag = AtomicBool::new(false);
        let code = wait_for_child(spawn_sh("exit 2"), &flag).unwrap();
        assert_eq!(code, 2);
    }

    #[cfg(unix)]
    #[test]
    fn clean_child_exit_is_zero() {
        let flag = AtomicBool::new(false);
        let code = wait_for_child(spawn_sh("exit 0"), &flag).unwrap();
        assert_eq!(code, 0);
    }

    #[cfg(unix)]
    #[test]
    fn interrupt_maps_to_130() {
        // Simulates Ctrl+C: the handler has set the flag and the child has
        // already died from the signal.
        let flag = AtomicBool::new(true);
        let code = wait_for_child(spawn_sh("exit 0"), &flag).unwrap();
        assert_eq!(code, EXIT_INTERRUPTED);
    }

    #[cfg(unix)]
    #[test]
    fn signal_death_without_interrupt_is_a_failure() {
        let flag = AtomicBool::new(false);
        let code = wait_for_child(spawn_sh("kill -TERM $$"), &flag).unwrap();
        assert_eq!(code, 1);
    }
}
