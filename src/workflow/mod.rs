//! Release workflow orchestration
//!
//! A bump has two phases:
//!
//! 1. [ReleaseWorkflow::plan] - read-only: checks the repository, reads the
//!    manifest, computes the new version and builds the ordered step list.
//! 2. [ReleaseWorkflow::execute] - runs the steps in order and stops at the
//!    first failure.
//!
//! A dry run stops after phase 1. Nothing executed before a failing step is
//! rolled back; the returned [VbumpError::StepFailed] names the failing step
//! and every step that already completed.

pub mod plan;

pub use plan::{build_steps, ReleasePlan, Step, StepAction, StepInputs};

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::ReleaseConfig;
use crate::domain::{
    calculate_new_version, resolve_commit_message, tag_name, BumpKind, Version, VersionInfo,
};
use crate::error::{Result, VbumpError};
use crate::git::Repository;
use crate::manifest;
use crate::ui;
use crate::warning::ReleaseWarning;

/// Everything a single bump invocation needs
#[derive(Debug, Clone)]
pub struct BumpOptions {
    pub config: ReleaseConfig,
    pub bump_kind: BumpKind,
    pub dry_run: bool,
    pub skip_push: bool,
    pub skip_merge: bool,
    /// Used verbatim instead of the configured template
    pub commit_message: Option<String>,
}

impl BumpOptions {
    pub fn new(config: ReleaseConfig, bump_kind: BumpKind) -> Self {
        BumpOptions {
            config,
            bump_kind,
            dry_run: false,
            skip_push: false,
            skip_merge: false,
            commit_message: None,
        }
    }
}

/// Drives a bump against a repository rooted at `root`
pub struct ReleaseWorkflow<'a, R: Repository> {
    repo: &'a R,
    root: PathBuf,
}

impl<'a, R: Repository> ReleaseWorkflow<'a, R> {
    pub fn new(repo: &'a R, root: impl Into<PathBuf>) -> Self {
        ReleaseWorkflow {
            repo,
            root: root.into(),
        }
    }

    /// Resolves everything the release will do without changing anything.
    ///
    /// Issues only read-only git queries (`rev-parse --git-dir` and, when no
    /// source branch is configured, `branch --show-current`).
    pub fn plan(&self, options: &BumpOptions) -> Result<ReleasePlan> {
        if !self.repo.is_repository() {
            return Err(VbumpError::NotARepository);
        }

        let config = &options.config;
        let manifest_file = self.root.join(&config.manifest_path);
        let current = manifest::read_version_string(&manifest_file)?;
        let old_version = Version::parse(&current)?;
        let new_version = calculate_new_version(&current, options.bump_kind)?;

        if !options.skip_merge {
            if let Some(index) = config.target_branches.iter().position(|b| b.is_empty()) {
                return Err(VbumpError::EmptyTargetBranch { index: index + 1 });
            }
        }

        let source_branch = match &config.source_branch {
            Some(branch) => branch.clone(),
            None => self.repo.current_branch()?,
        };

        let commit_message = resolve_commit_message(
            options.commit_message.as_deref(),
            &config.commit_template(),
            &new_version,
        );
        let tag = config
            .create_tag
            .then(|| tag_name(&config.tag_prefix, &new_version));
        let manifest_arg = config.manifest_path.to_string_lossy().into_owned();

        let steps = build_steps(&StepInputs {
            source_branch: &source_branch,
            target_branches: &config.target_branches,
            manifest_path: &manifest_arg,
            commit_message: &commit_message,
            tag: tag.as_deref(),
            push: !options.skip_push,
            merge: !options.skip_merge,
        });

        debug!(
            old = %old_version,
            new = %new_version,
            source = %source_branch,
            steps = steps.len(),
            "release planned"
        );

        Ok(ReleasePlan {
            version_info: VersionInfo {
                old_version,
                new_version,
            },
            source_branch,
            target_branches: config.target_branches.clone(),
            manifest_path: config.manifest_path.clone(),
            manifest_file,
            commit_message,
            tag,
            push: !options.skip_push,
            merge: !options.skip_merge,
            steps,
        })
    }

    /// Plans the release and, unless `dry_run`, executes it.
    pub fn bump(&self, options: &BumpOptions) -> Result<VersionInfo> {
        let plan = self.plan(options)?;

        if options.commit_message.is_none() && !options.config.commit_template().has_placeholder()
        {
            ui::display_warning(&ReleaseWarning::TemplateWithoutPlaceholder {
                template: options.config.commit_message_template.clone(),
            });
        }

        if options.dry_run {
            info!(new = %plan.new_version(), "dry run, no changes made");
            ui::display_plan(&plan);
            return Ok(plan.version_info);
        }

        self.execute(&plan)?;
        Ok(plan.version_info)
    }

    /// Runs the plan's steps in order, stopping at the first failure.
    pub fn execute(&self, plan: &ReleasePlan) -> Result<()> {
        let mut completed: Vec<String> = Vec::new();

        for step in &plan.steps {
            ui::display_status(&step.name);

            if let Err(source) = self.run_step(step, plan) {
                return Err(VbumpError::StepFailed {
                    step: step.name.clone(),
                    completed,
                    source: Box::new(source),
                });
            }

            debug!(step = %step.name, "step completed");
            completed.push(step.name.clone());
        }

        info!(version = %plan.new_version(), "release completed");
        Ok(())
    }

    fn run_step(&self, step: &Step, plan: &ReleasePlan) -> Result<()> {
        match &step.action {
            StepAction::Git { subcommand, args } => {
                let args: Vec<&str> = args.iter().map(String::as_str).collect();
                self.repo.run(subcommand, &args)?;
            }
            StepAction::WriteManifest => {
                manifest::update_version(&plan.manifest_file, &plan.new_version())?;
            }
        }
        Ok(())
    }
}
