//! Launching real processes

use mkast_runner::{Launch, ProcessLauncher, RunnerError};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct LaunchTestEnv {
    temp_dir: TempDir,
}

impl LaunchTestEnv {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Temp tree under the test's working directory, so it can be named relatively
    #[cfg(unix)]
    fn in_working_dir() -> Self {
        Self {
            temp_dir: tempfile::Builder::new()
                .prefix("launch-test")
                .tempdir_in(std::env::current_dir().unwrap())
                .expect("Failed to create temp directory"),
        }
    }

    #[cfg(unix)]
    fn create_script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }
}

#[cfg(unix)]
#[test]
fn test_launch_runs_in_executable_directory() {
    let env = LaunchTestEnv::new();
    let script = env.create_script("game.sh", "pwd > started.txt");

    let result = ProcessLauncher::new().launch(&script).unwrap();
    assert!(result.pid > 0);
    assert_eq!(result.program, script);

    // The launch call itself never waits; poll for the marker instead
    let marker = env.temp_dir.path().join("started.txt");
    assert!(wait_for(&marker));
}

#[cfg(unix)]
fn wait_for(path: &Path) -> bool {
    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
    while !path.exists() && std::time::Instant::now() < deadline {
        std::thread::sleep(std::time::Duration::from_millis(20));
    }
    path.exists()
}

#[cfg(unix)]
#[test]
fn test_launch_relative_path_from_launcher_directory() {
    let env = LaunchTestEnv::in_working_dir();
    let script = env.create_script("games/pong/pong.sh", "pwd > started.txt");

    let cwd = std::env::current_dir().unwrap();
    let relative = script.strip_prefix(&cwd).unwrap();
    assert!(relative.is_relative());

    let result = ProcessLauncher::new().launch(relative).unwrap();
    assert!(result.program.is_absolute());
    assert!(result.program.ends_with("games/pong/pong.sh"));

    // Still started inside the game's own directory
    let marker = env.temp_dir.path().join("games/pong/started.txt");
    assert!(wait_for(&marker));
}

#[cfg(unix)]
#[test]
fn test_launch_does_not_block_on_long_running_game() {
    let env = LaunchTestEnv::new();
    let script = env.create_script("slow.sh", "sleep 5");

    let started = std::time::Instant::now();
    ProcessLauncher::new().launch(&script).unwrap();
    assert!(started.elapsed() < std::time::Duration::from_secs(2));
}

#[test]
fn test_missing_executable_is_reported() {
    let env = LaunchTestEnv::new();
    let missing = env.temp_dir.path().join("missing.exe");

    let err = ProcessLauncher::new().launch(&missing).unwrap_err();
    assert!(matches!(err, RunnerError::NotFound(_)));
    assert!(err.to_string().contains("missing.exe"));
}

#[cfg(unix)]
#[test]
fn test_non_executable_file_fails_to_spawn() {
    let env = LaunchTestEnv::new();
    let path = env.temp_dir.path().join("data.bin");
    fs::write(&path, b"\x00\x01").unwrap();

    let err = ProcessLauncher::new().launch(&path).unwrap_err();
    assert!(matches!(err, RunnerError::LaunchFailed(_)));
}
