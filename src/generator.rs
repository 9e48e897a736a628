//! External documentation generator invocation.

use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::Command;

/// Runs generator command through the platform shell.
///
/// The command string is handed to `sh -c` (`cmd /C` on Windows) so it may
/// contain arguments, pipes or environment expansion.
///
/// # Arguments
///
/// * `command`: Shell command, e.g. `go generate`
/// * `working_dir`: Directory the command runs in
///
/// # Errors
///
/// Returns error if the command is empty, cannot be spawned, or exits with
/// a non zero status
pub fn run(command: &str, working_dir: impl AsRef<Path>) -> Result<()> {
    let command = command.trim();
    if command.is_empty() {
        bail!("Generator command is empty");
    }

    let working_dir = working_dir.as_ref();
    log::info!("Running generator: {}", command);

    let status = shell(command)
        .current_dir(working_dir)
        .status()
        .with_context(|| format!("Failed to start generator: {}", command))?;

    if !status.success() {
        bail!("Generator `{}` failed with {}", command, status);
    }

    Ok(())
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", command]);
    cmd
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    cmd
}
