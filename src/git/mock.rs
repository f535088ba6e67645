use std::collections::HashMap;
use std::sync::Mutex;

use super::{format_command, Repository};
use crate::error::{Result, VbumpError};

/// Mock repository for testing without actual git operations
///
/// Every command is recorded as its formatted command line
/// (e.g. `"git pull origin main"`). Outputs and failures are keyed by
/// the same command line.
pub struct MockRepository {
    outputs: HashMap<String, String>,
    failures: HashMap<String, String>,
    commands: Mutex<Vec<String>>,
}

impl MockRepository {
    /// Create a new mock where every command succeeds with empty output
    pub fn new() -> Self {
        MockRepository {
            outputs: HashMap::new(),
            failures: HashMap::new(),
            commands: Mutex::new(Vec::new()),
        }
    }

    /// Mock a repository checked out on `branch`
    pub fn on_branch(branch: &str) -> Self {
        Self::new().with_output("git branch --show-current", format!("{}\n", branch))
    }

    /// Script the stdout returned for a command line
    pub fn with_output(mut self, command: impl Into<String>, stdout: impl Into<String>) -> Self {
        self.outputs.insert(command.into(), stdout.into());
        self
    }

    /// Make a command line fail with the given message
    pub fn fail_on(mut self, command: impl Into<String>, message: impl Into<String>) -> Self {
        self.failures.insert(command.into(), message.into());
        self
    }

    /// Make the repository probe fail
    pub fn not_a_repository(self) -> Self {
        self.fail_on("git rev-parse --git-dir", "not a git repository")
    }

    /// Command lines issued so far, in order
    pub fn commands(&self) -> Vec<String> {
        self.commands
            .lock()
            .map(|commands| commands.clone())
            .unwrap_or_default()
    }

    /// Command lines issued so far, minus read-only queries
    pub fn mutating_commands(&self) -> Vec<String> {
        self.commands()
            .into_iter()
            .filter(|c| c != "git rev-parse --git-dir" && c != "git branch --show-current")
            .collect()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn run(&self, subcommand: &str, args: &[&str]) -> Result<String> {
        let command = format_command(subcommand, args);
        if let Ok(mut commands) = self.commands.lock() {
            commands.push(command.clone());
        }

        if let Some(message) = self.failures.get(&command) {
            return Err(VbumpError::command_failed(command, message.clone()));
        }

        Ok(self.outputs.get(&command).cloned().unwrap_or_default())
    }
}
