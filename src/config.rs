use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::CommitTemplate;
use crate::error::{Result, VbumpError};
use crate::manifest::DEFAULT_MANIFEST;

/// Project-level configuration file name, looked up in the project root
pub const CONFIG_FILE_NAME: &str = "vbump.json";

/// Built-in commit message template
pub const DEFAULT_COMMIT_TEMPLATE: &str = "chore: bump version to {version}";

/// Built-in tag prefix
pub const DEFAULT_TAG_PREFIX: &str = "v";

/// The effective release configuration for one invocation.
///
/// Built once by [resolve] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseConfig {
    /// Branch that receives the bump commit and tag; `None` means the
    /// currently checked-out branch.
    pub source_branch: Option<String>,
    /// Branches that receive the source branch afterwards, in order.
    pub target_branches: Vec<String>,
    pub commit_message_template: String,
    pub manifest_path: PathBuf,
    pub create_tag: bool,
    pub tag_prefix: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            source_branch: None,
            target_branches: Vec::new(),
            commit_message_template: DEFAULT_COMMIT_TEMPLATE.to_string(),
            manifest_path: PathBuf::from(DEFAULT_MANIFEST),
            create_tag: true,
            tag_prefix: DEFAULT_TAG_PREFIX.to_string(),
        }
    }
}

impl ReleaseConfig {
    pub fn commit_template(&self) -> CommitTemplate {
        CommitTemplate::new(self.commit_message_template.clone())
    }
}

/// A configuration layer where every field is optional.
///
/// This is both the shape of the persisted `vbump.json` file and of the
/// command-line overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_branch: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_branches: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_message_template: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_tag: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_prefix: Option<String>,
}

impl From<&ReleaseConfig> for PartialConfig {
    fn from(config: &ReleaseConfig) -> Self {
        PartialConfig {
            source_branch: config.source_branch.clone(),
            target_branches: Some(config.target_branches.clone()),
            commit_message_template: Some(config.commit_message_template.clone()),
            manifest_path: Some(config.manifest_path.clone()),
            create_tag: Some(config.create_tag),
            tag_prefix: Some(config.tag_prefix.clone()),
        }
    }
}

/// Merges configuration layers field by field.
///
/// Precedence: explicit override, then the persisted file, then `defaults`.
pub fn resolve(
    defaults: ReleaseConfig,
    persisted: Option<PartialConfig>,
    overrides: PartialConfig,
) -> ReleaseConfig {
    let persisted = persisted.unwrap_or_default();

    ReleaseConfig {
        source_branch: overrides
            .source_branch
            .or(persisted.source_branch)
            .or(defaults.source_branch),
        target_branches: overrides
            .target_branches
            .or(persisted.target_branches)
            .unwrap_or(defaults.target_branches),
        commit_message_template: overrides
            .commit_message_template
            .or(persisted.commit_message_template)
            .unwrap_or(defaults.commit_message_template),
        manifest_path: overrides
            .manifest_path
            .or(persisted.manifest_path)
            .unwrap_or(defaults.manifest_path),
        create_tag: overrides
            .create_tag
            .or(persisted.create_tag)
            .unwrap_or(defaults.create_tag),
        tag_prefix: overrides
            .tag_prefix
            .or(persisted.tag_prefix)
            .unwrap_or(defaults.tag_prefix),
    }
}

/// Splits a comma-separated branch list, trimming each entry.
///
/// Empty entries are kept as `""` so a stray comma is visible to the caller
/// instead of silently disappearing.
///
/// # Example
/// ```
/// use vbump::config::parse_target_branches;
///
/// assert_eq!(parse_target_branches(" develop, staging "), vec!["develop", "staging"]);
/// assert_eq!(parse_target_branches("develop,"), vec!["develop", ""]);
/// ```
pub fn parse_target_branches(list: &str) -> Vec<String> {
    list.split(',').map(|b| b.trim().to_string()).collect()
}

/// Finds the configuration file to use, if any.
///
/// An `explicit` path is returned as given; otherwise only `vbump.json` in
/// the project root is considered.
pub fn find_config(root: &Path, explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let project = root.join(CONFIG_FILE_NAME);
    project.exists().then_some(project)
}

/// Loads the persisted configuration layer.
///
/// # Returns
/// * `Ok(None)` - No configuration file found
/// * `Ok(Some(_))` - Parsed configuration
/// * `Err(ConfigNotFound)` - The explicitly requested file does not exist
/// * `Err(ConfigLoadFailed)` - A file was selected but could not be read or parsed
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Option<PartialConfig>> {
    let Some(path) = find_config(root, explicit) else {
        debug!("no configuration file found");
        return Ok(None);
    };

    if !path.exists() {
        return Err(VbumpError::ConfigNotFound(path));
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| VbumpError::config_load(&path, e.to_string()))?;
    let config: PartialConfig = serde_json::from_str(&content)
        .map_err(|e| VbumpError::config_load(&path, e.to_string()))?;

    debug!(path = %path.display(), "loaded configuration");
    Ok(Some(config))
}

/// Writes a new configuration file, refusing to overwrite an existing one.
pub fn write_config(path: &Path, config: &PartialConfig) -> Result<()> {
    if path.exists() {
        return Err(VbumpError::ConfigExists(path.to_path_buf()));
    }

    let mut content = serde_json::to_string_pretty(config)?;
    content.push('\n');
    fs::write(path, content)?;
    Ok(())
}
