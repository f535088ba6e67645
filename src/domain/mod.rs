//! Domain logic - pure versioning and naming rules independent of git and the filesystem

pub mod release;
pub mod version;

pub use release::{resolve_commit_message, tag_name, CommitTemplate};
pub use version::{calculate_new_version, BumpKind, Version};

/// Outcome of a completed (or simulated) bump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionInfo {
    pub old_version: Version,
    pub new_version: Version,
}
