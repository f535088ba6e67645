use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use super::{format_command, Repository};
use crate::error::{Result, VbumpError};

/// Repository backend that shells out to the system `git` binary
#[derive(Debug, Clone)]
pub struct SystemGit {
    work_dir: PathBuf,
}

impl SystemGit {
    /// Run every command from `work_dir`
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        SystemGit {
            work_dir: work_dir.into(),
        }
    }
}

impl Repository for SystemGit {
    fn run(&self, subcommand: &str, args: &[&str]) -> Result<String> {
        let command_line = format_command(subcommand, args);
        debug!(command = %command_line, cwd = %self.work_dir.display(), "running git");

        let output = Command::new("git")
            .arg(subcommand)
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .map_err(|e| {
                VbumpError::command_failed(&command_line, format!("failed to run git: {}", e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
            let message = if !stderr.is_empty() {
                stderr
            } else if !stdout.is_empty() {
                stdout
            } else {
                format!("exited with {}", output.status)
            };
            debug!(command = %command_line, %message, "git command failed");
            return Err(VbumpError::command_failed(command_line, message));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
