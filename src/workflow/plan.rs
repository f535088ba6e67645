//! The release as an explicit, ordered list of named steps.
//!
//! Building the list is pure; running it lives in the parent module.

use std::fmt;
use std::path::PathBuf;

use crate::domain::{Version, VersionInfo};
use crate::git::{format_command, REMOTE};

/// What a step does when it runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    /// Run `git <subcommand> <args...>`
    Git {
        subcommand: String,
        args: Vec<String>,
    },
    /// Write the new version into the manifest
    WriteManifest,
}

/// A named unit of the release workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub name: String,
    pub action: StepAction,
}

impl Step {
    fn git(name: impl Into<String>, subcommand: &str, args: &[&str]) -> Self {
        Step {
            name: name.into(),
            action: StepAction::Git {
                subcommand: subcommand.to_string(),
                args: args.iter().map(|a| a.to_string()).collect(),
            },
        }
    }
}

impl fmt::Display for StepAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepAction::Git { subcommand, args } => {
                let args: Vec<&str> = args.iter().map(String::as_str).collect();
                f.write_str(&format_command(subcommand, &args))
            }
            StepAction::WriteManifest => f.write_str("update manifest version"),
        }
    }
}

/// Everything a bump will do, resolved before anything is touched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePlan {
    pub version_info: VersionInfo,
    pub source_branch: String,
    pub target_branches: Vec<String>,
    /// Manifest path as configured (relative to the project root); staged with `git add`
    pub manifest_path: PathBuf,
    /// Manifest path resolved against the project root; read and written
    pub manifest_file: PathBuf,
    pub commit_message: String,
    pub tag: Option<String>,
    pub push: bool,
    pub merge: bool,
    pub steps: Vec<Step>,
}

impl ReleasePlan {
    pub fn new_version(&self) -> Version {
        self.version_info.new_version
    }
}

/// Decisions that shape the step list
#[derive(Debug, Clone)]
pub struct StepInputs<'a> {
    pub source_branch: &'a str,
    pub target_branches: &'a [String],
    pub manifest_path: &'a str,
    pub commit_message: &'a str,
    pub tag: Option<&'a str>,
    pub push: bool,
    pub merge: bool,
}

/// Builds the ordered steps of a release.
///
/// Order: fetch, switch to source, pull, write manifest, stage, commit,
/// optional tag, optional pushes, then per target: switch, pull, pull the
/// source branch from the remote, optional push; finally back to source.
pub fn build_steps(inputs: &StepInputs<'_>) -> Vec<Step> {
    let source = inputs.source_branch;
    let mut steps = vec![
        Step::git("fetch", "fetch", &[]),
        Step::git(format!("switch to {}", source), "switch", &[source]),
        Step::git(format!("pull {}", source), "pull", &[]),
        Step {
            name: "write manifest".to_string(),
            action: StepAction::WriteManifest,
        },
        Step::git("stage manifest", "add", &[inputs.manifest_path]),
        Step::git("commit", "commit", &["-m", inputs.commit_message]),
    ];

    if let Some(tag) = inputs.tag {
        steps.push(Step::git(format!("tag {}", tag), "tag", &[tag]));
    }

    if inputs.push {
        steps.push(Step::git(
            format!("push {}", source),
            "push",
            &[REMOTE, source],
        ));
        if inputs.tag.is_some() {
            steps.push(Step::git("push tags", "push", &[REMOTE, "--tags"]));
        }
    }

    if inputs.merge && !inputs.target_branches.is_empty() {
        for target in inputs.target_branches {
            let target = target.as_str();
            steps.push(Step::git(format!("switch to {}", target), "switch", &[target]));
            steps.push(Step::git(format!("pull {}", target), "pull", &[]));
            steps.push(Step::git(
                format!("merge {} into {}", source, target),
                "pull",
                &[REMOTE, source],
            ));
            if inputs.push {
                steps.push(Step::git(
                    format!("push {}", target),
                    "push",
                    &[REMOTE, target],
                ));
            }
        }
        steps.push(Step::git(
            format!("return to {}", source),
            "switch",
            &[source],
        ));
    }

    steps
}
