//! Git operations abstraction layer
//!
//! Everything vbump does to a repository goes through the [Repository]
//! trait, a thin wrapper that issues one git subcommand per call and surfaces
//! failures as [VbumpError::RepositoryCommandFailed]. Implementations:
//!
//! - [system::SystemGit]: shells out to the `git` binary on `PATH`
//! - [mock::MockRepository]: records commands and scripts their results, for tests
//!
//! There are no retries: a command either succeeds once or the caller aborts.
//!
//! ```rust
//! # use vbump::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> vbump::Result<()> {
//! if repo.is_repository() {
//!     let branch = repo.current_branch()?;
//!     repo.run("switch", &[&branch])?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod system;

pub use mock::MockRepository;
pub use system::SystemGit;

use crate::error::{Result, VbumpError};

/// Remote that every fetch/pull/push targets
pub const REMOTE: &str = "origin";

/// Common git operation trait for abstraction
pub trait Repository {
    /// Run `git <subcommand> <args...>` and return its stdout.
    ///
    /// # Errors
    /// `RepositoryCommandFailed` carrying the full command line if git cannot
    /// be started or exits non-zero.
    fn run(&self, subcommand: &str, args: &[&str]) -> Result<String>;

    /// Probe for a repository with a no-op root query.
    ///
    /// Never fails: any error collapses to `false`.
    fn is_repository(&self) -> bool {
        self.run("rev-parse", &["--git-dir"]).is_ok()
    }

    /// Name of the checked-out branch.
    ///
    /// A detached HEAD (empty output) is reported as a failed command.
    fn current_branch(&self) -> Result<String> {
        let args = ["--show-current"];
        let branch = self.run("branch", &args)?.trim().to_string();
        if branch.is_empty() {
            return Err(VbumpError::command_failed(
                format_command("branch", &args),
                "HEAD is detached; pass a source branch explicitly",
            ));
        }
        Ok(branch)
    }
}

/// Render a git invocation the way a user would type it.
///
/// Arguments containing whitespace or quotes are double-quoted so the
/// message in an error can be pasted back into a shell.
pub fn format_command(subcommand: &str, args: &[&str]) -> String {
    let mut line = format!("git {}", subcommand);
    for arg in args {
        line.push(' ');
        if arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '"') {
            line.push('"');
            line.push_str(&arg.replace('"', "\\\""));
            line.push('"');
        } else {
            line.push_str(arg);
        }
    }
    line
}
