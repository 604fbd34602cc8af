//! Common test utilities for bindata CLI and batch tests.
//!
//! - `TestEnv`: isolated working directory and home, plus CLI helpers
//! - `write_file`: create a file and its parents in one call

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Result of running the bindata CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated test environment with temp directories.
///
/// HOME and XDG_CONFIG_HOME point into the temp home so no user config
/// leaks in, and every `BINDATA_*` variable is cleared.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("create project dir"),
            home_dir: tempfile::tempdir().expect("create home dir"),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file under the project root
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        write_file(self.project_root.path(), relative, content)
    }

    /// Run bindata from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run bindata from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_bindata"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("RUST_LOG");
        for key in [
            "BINDATA_PATH",
            "BINDATA_DEBUG",
            "BINDATA_NO_COMPRESS",
            "BINDATA_NO_MEMCOPY",
            "BINDATA_FMT",
            "BINDATA_TAGS",
        ] {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute bindata");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Create `root/relative` with `content`, making parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dirs");
    }
    std::fs::write(&path, content).expect("write fixture file");
    path
}
