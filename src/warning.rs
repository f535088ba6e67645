use std::fmt;
use std::path::PathBuf;

/// Non-fatal conditions worth telling the user about.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseWarning {
    /// The configuration file exists but could not be used; defaults apply
    ConfigIgnored { path: PathBuf, reason: String },
    /// The commit template never mentions the version
    TemplateWithoutPlaceholder { template: String },
    /// A step failed after earlier steps already changed the repository
    PartialRelease {
        failed_step: String,
        completed_steps: Vec<String>,
    },
}

impl fmt::Display for ReleaseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseWarning::ConfigIgnored { path, reason } => {
                write!(
                    f,
                    "Ignoring configuration file '{}': {} (using defaults and flags only)",
                    path.display(),
                    reason
                )
            }
            ReleaseWarning::TemplateWithoutPlaceholder { template } => {
                write!(
                    f,
                    "Commit message template '{}' has no {{version}} placeholder",
                    template
                )
            }
            ReleaseWarning::PartialRelease {
                failed_step,
                completed_steps,
            } => {
                write!(
                    f,
                    "Release stopped at '{}'. Nothing was rolled back; completed steps: {}. \
                     Inspect the repository and finish or revert manually.",
                    failed_step,
                    if completed_steps.is_empty() {
                        "none".to_string()
                    } else {
                        completed_steps.join(", ")
                    }
                )
            }
        }
    }
}
