//! Command handlers behind the `vbump` binary
//!
//! The argument structs mirror the CLI flags but do not depend on clap, so
//! every command can be driven programmatically (and from tests).

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{info, warn};

use crate::config::{
    self, parse_target_branches, PartialConfig, ReleaseConfig, CONFIG_FILE_NAME,
};
use crate::domain::{BumpKind, Version, VersionInfo};
use crate::error::VbumpError;
use crate::git::SystemGit;
use crate::manifest;
use crate::ui;
use crate::warning::ReleaseWarning;
use crate::workflow::{BumpOptions, ReleaseWorkflow};

/// Arguments for the bump command
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BumpArgs {
    /// Project root; git runs here and relative paths resolve against it
    pub root: PathBuf,
    /// Explicit configuration file
    pub config_path: Option<PathBuf>,
    pub bump_kind: Option<BumpKind>,
    pub message: Option<String>,
    pub source: Option<String>,
    /// Comma-separated target branches
    pub targets: Option<String>,
    pub skip_push: bool,
    pub skip_merge: bool,
    pub package: Option<PathBuf>,
    pub dry_run: bool,
    /// `Some(true)` for `--tag`, `Some(false)` for `--no-tag`
    pub tag: Option<bool>,
    pub tag_prefix: Option<String>,
}

impl BumpArgs {
    /// The command-line layer of the configuration
    pub fn overrides(&self) -> PartialConfig {
        PartialConfig {
            source_branch: self.source.clone(),
            target_branches: self.targets.as_deref().map(parse_target_branches),
            commit_message_template: None,
            manifest_path: self.package.clone(),
            create_tag: self.tag,
            tag_prefix: self.tag_prefix.clone(),
        }
    }
}

/// Arguments for the current command
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrentArgs {
    pub root: PathBuf,
    pub config_path: Option<PathBuf>,
    pub package: Option<PathBuf>,
}

/// Arguments for the init command
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitArgs {
    pub root: PathBuf,
    /// Write to this path instead of `<root>/vbump.json`
    pub config_path: Option<PathBuf>,
    /// Accept every default without prompting
    pub yes: bool,
}

/// Loads the persisted layer, downgrading a broken file to a warning.
pub fn load_persisted(root: &Path, explicit: Option<&Path>) -> Result<Option<PartialConfig>> {
    match config::load_config(root, explicit) {
        Ok(config) => Ok(config),
        Err(VbumpError::ConfigLoadFailed { path, reason }) => {
            warn!(path = %path.display(), %reason, "configuration ignored");
            ui::display_warning(&ReleaseWarning::ConfigIgnored { path, reason });
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Runs the bump workflow with the merged configuration.
pub fn run_bump(args: &BumpArgs) -> Result<VersionInfo> {
    let bump_kind = args.bump_kind.ok_or(VbumpError::MissingBumpKind)?;

    let persisted = load_persisted(&args.root, args.config_path.as_deref())?;
    let config = config::resolve(ReleaseConfig::default(), persisted, args.overrides());
    info!(?config, kind = %bump_kind, "resolved configuration");

    let options = BumpOptions {
        config,
        bump_kind,
        dry_run: args.dry_run,
        skip_push: args.skip_push,
        skip_merge: args.skip_merge,
        commit_message: args.message.clone(),
    };

    let repo = SystemGit::new(&args.root);
    let workflow = ReleaseWorkflow::new(&repo, &args.root);

    let info = match workflow.bump(&options) {
        Ok(info) => info,
        Err(e) => {
            if let VbumpError::StepFailed {
                step, completed, ..
            } = &e
            {
                if !completed.is_empty() {
                    ui::display_warning(&ReleaseWarning::PartialRelease {
                        failed_step: step.clone(),
                        completed_steps: completed.clone(),
                    });
                }
            }
            return Err(e.into());
        }
    };

    ui::display_version_change(&info);
    if args.dry_run {
        ui::display_status(&format!(
            "Dry run complete: {} would become {}",
            info.old_version, info.new_version
        ));
    } else {
        ui::display_success(&format!("Released version {}", info.new_version));
    }
    Ok(info)
}

/// Reads the manifest version without touching anything.
pub fn run_current(args: &CurrentArgs) -> Result<Version> {
    let persisted = load_persisted(&args.root, args.config_path.as_deref())?;
    let overrides = PartialConfig {
        manifest_path: args.package.clone(),
        ..Default::default()
    };
    let config = config::resolve(ReleaseConfig::default(), persisted, overrides);

    let version = manifest::get_current_version(&args.root.join(&config.manifest_path))?;
    println!("{}", version);
    Ok(version)
}

/// Writes a new configuration file, prompting for each field unless `yes`.
pub fn run_init(args: &InitArgs) -> Result<PathBuf> {
    let path = args
        .config_path
        .clone()
        .unwrap_or_else(|| args.root.join(CONFIG_FILE_NAME));

    if path.exists() {
        return Err(VbumpError::ConfigExists(path).into());
    }

    let defaults = ReleaseConfig::default();
    let config = if args.yes {
        PartialConfig::from(&defaults)
    } else {
        prompt_config(&defaults)?
    };

    config::write_config(&path, &config)?;
    ui::display_success(&format!("Created {}", path.display()));
    Ok(path)
}

fn prompt_config(defaults: &ReleaseConfig) -> Result<PartialConfig> {
    let source = ui::prompt_with_default("Source branch (empty = current branch)", "")?;
    let targets = ui::prompt_with_default("Target branches, comma-separated", "")?;
    let template = ui::prompt_with_default(
        "Commit message template",
        &defaults.commit_message_template,
    )?;
    let manifest_path = ui::prompt_with_default(
        "Manifest path",
        &defaults.manifest_path.to_string_lossy(),
    )?;
    let create_tag = ui::confirm_action("Create a git tag for each release?", defaults.create_tag)?;
    let tag_prefix = ui::prompt_with_default("Tag prefix", &defaults.tag_prefix)?;

    Ok(PartialConfig {
        source_branch: (!source.is_empty()).then_some(source),
        target_branches: Some(if targets.is_empty() {
            Vec::new()
        } else {
            parse_target_branches(&targets)
        }),
        commit_message_template: Some(template),
        manifest_path: Some(PathBuf::from(manifest_path)),
        create_tag: Some(create_tag),
        tag_prefix: Some(tag_prefix),
    })
}
