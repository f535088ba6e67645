use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for vbump operations
#[derive(Error, Debug)]
pub enum VbumpError {
    #[error("Invalid version format: '{version}' - {reason}")]
    InvalidVersionFormat { version: String, reason: String },

    #[error("Manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("Failed to parse manifest {}: {reason}", .path.display())]
    ManifestParse { path: PathBuf, reason: String },

    #[error("Manifest {} has no string \"version\" field", .0.display())]
    MissingVersionField(PathBuf),

    #[error("Not a git repository (or any of the parent directories)")]
    NotARepository,

    #[error("Git command failed: `{command}`: {message}")]
    RepositoryCommandFailed { command: String, message: String },

    #[error("No bump kind given: pass one of --major, --minor or --patch")]
    MissingBumpKind,

    #[error("Unknown bump kind '{0}': expected major, minor or patch")]
    InvalidBumpKind(String),

    #[error("Failed to load configuration from {}: {reason}", .path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Configuration file already exists: {}", .0.display())]
    ConfigExists(PathBuf),

    #[error("Target branch #{index} is empty (check for stray commas in the target list)")]
    EmptyTargetBranch { index: usize },

    #[error("Step '{step}' failed: {source}")]
    StepFailed {
        step: String,
        completed: Vec<String>,
        #[source]
        source: Box<VbumpError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in vbump
pub type Result<T> = std::result::Result<T, VbumpError>;

impl VbumpError {
    /// Create an invalid version error with context
    pub fn invalid_version(version: impl Into<String>, reason: impl Into<String>) -> Self {
        VbumpError::InvalidVersionFormat {
            version: version.into(),
            reason: reason.into(),
        }
    }

    /// Create a failed git command error
    pub fn command_failed(command: impl Into<String>, message: impl Into<String>) -> Self {
        VbumpError::RepositoryCommandFailed {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Create a configuration load error
    pub fn config_load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        VbumpError::ConfigLoadFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Returns the innermost error, looking through `StepFailed` wrappers.
    pub fn root_cause(&self) -> &VbumpError {
        match self {
            VbumpError::StepFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
