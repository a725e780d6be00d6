//! Fire-and-forget process launching

use crate::RunnerError;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Launch result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchResult {
    /// PID of the launched process
    pub pid: u32,

    /// Resolved program that was started
    pub program: PathBuf,
}

/// Something that can start a game
pub trait Launch {
    fn launch(&self, path: &Path) -> Result<LaunchResult, RunnerError>;
}

/// Starts games as detached child processes
#[derive(Debug, Default, Clone)]
pub struct ProcessLauncher;

impl ProcessLauncher {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a catalog path to a runnable program.
    ///
    /// Paths that exist are used as-is; bare command names are looked up on `PATH`.
    pub fn resolve(path: &Path) -> Result<PathBuf, RunnerError> {
        if path.as_os_str().is_empty() {
            return Err(RunnerError::NotFound(path.to_path_buf()));
        }
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        if path.components().count() == 1 {
            if let Ok(found) = which::which(path) {
                return Ok(found);
            }
        }
        Err(RunnerError::NotFound(path.to_path_buf()))
    }
}

impl Launch for ProcessLauncher {
    fn launch(&self, path: &Path) -> Result<LaunchResult, RunnerError> {
        // Relative catalog paths are relative to the launcher, not to the game
        let program = std::path::absolute(Self::resolve(path)?)?;

        let mut cmd = Command::new(&program);

        // Games expect to find their data next to the binary
        if let Some(dir) = program.parent().filter(|d| !d.as_os_str().is_empty()) {
            cmd.current_dir(dir);
        }

        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::null());

        tracing::info!("Launching {}", program.display());

        let mut child = cmd
            .spawn()
            .map_err(|e| RunnerError::LaunchFailed(format!("Failed to spawn process: {}", e)))?;

        let pid = child.id();

        // Reap the child so it does not linger as a zombie
        let name = program.display().to_string();
        let reaper = std::thread::Builder::new()
            .name("game-reaper".to_string())
            .spawn(move || match child.wait() {
                Ok(status) => tracing::debug!("{} (pid {}) exited: {}", name, pid, status),
                Err(e) => tracing::warn!("Failed to wait for {} (pid {}): {}", name, pid, e),
            });
        if let Err(e) = reaper {
            tracing::warn!("Failed to start reaper thread for pid {}: {}", pid, e);
        }

        Ok(LaunchResult { pid, program })
    }
}
