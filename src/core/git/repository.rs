use crate::core::shell::ShellExecutor;
use crate::utils::{GitmateError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// A working copy on disk; runs `git` inside its root.
#[derive(Debug, Clone)]
pub struct GitRepository {
    pub root: PathBuf,
}

impl GitRepository {
    pub fn discover() -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    pub fn discover_from(path: &Path) -> Result<Self> {
        let output = Command::new("git")
            .current_dir(path)
            .args(["rev-parse", "--show-toplevel"])
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitmateError::invalid_args(format!(
                "Not a git repository or git not found: {}",
                stderr.trim()
            )));
        }

        let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(Self {
            root: PathBuf::from(root),
        })
    }
}

impl ShellExecutor for GitRepository {
    fn run(&self, args: &[&str]) -> Result<String> {
        debug!(command = %args.join(" "), "running git");

        let output = Command::new("git")
            .current_dir(&self.root)
            .args(args)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let exit_code = output.status.code().unwrap_or(-1);
            debug!(exit_code, %stderr, "git command failed");
            return Err(GitmateError::shell(args.join(" "), exit_code, stderr));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.trim().to_string())
    }
}
