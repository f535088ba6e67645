use super::Version;

/// Placeholder substituted with the new version in commit message templates
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Commit message template (e.g., "chore: bump version to {version}")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitTemplate {
    pub template: String,
}

impl CommitTemplate {
    /// Create a new commit template
    pub fn new(template: impl Into<String>) -> Self {
        CommitTemplate {
            template: template.into(),
        }
    }

    /// Whether the template mentions the version at all
    pub fn has_placeholder(&self) -> bool {
        self.template.contains(VERSION_PLACEHOLDER)
    }

    /// Render the template for a version, replacing every placeholder occurrence
    pub fn render(&self, version: &Version) -> String {
        self.template
            .replace(VERSION_PLACEHOLDER, &version.to_string())
    }
}

/// Picks the commit message: an explicit message wins over the template.
pub fn resolve_commit_message(
    explicit: Option<&str>,
    template: &CommitTemplate,
    version: &Version,
) -> String {
    match explicit {
        Some(message) => message.to_string(),
        None => template.render(version),
    }
}

/// Tag name for a released version, e.g. prefix "v" + "1.2.3" -> "v1.2.3"
pub fn tag_name(prefix: &str, version: &Version) -> String {
    format!("{}{}", prefix, version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_template() {
        let template = CommitTemplate::new("chore: release {version}");
        assert_eq!(
            template.render(&Version::new(1, 3, 0)),
            "chore: release 1.3.0"
        );
    }

    #[test]
    fn test_render_replaces_every_placeholder() {
        let template = CommitTemplate::new("{version}: bump to {version}");
        assert_eq!(template.render(&Version::new(2, 0, 0)), "2.0.0: bump to 2.0.0");
    }

    #[test]
    fn test_render_without_placeholder() {
        let template = CommitTemplate::new("release");
        assert!(!template.has_placeholder());
        assert_eq!(template.render(&Version::new(2, 0, 0)), "release");
    }

    #[test]
    fn test_explicit_message_wins() {
        let template = CommitTemplate::new("chore: {version}");
        let version = Version::new(1, 0, 1);
        assert_eq!(
            resolve_commit_message(Some("hotfix release"), &template, &version),
            "hotfix release"
        );
        assert_eq!(
            resolve_commit_message(None, &template, &version),
            "chore: 1.0.1"
        );
    }

    #[test]
    fn test_tag_name() {
        assert_eq!(tag_name("v", &Version::new(1, 2, 3)), "v1.2.3");
        assert_eq!(tag_name("release-", &Version::new(1, 2, 3)), "release-1.2.3");
        assert_eq!(tag_name("", &Version::new(1, 2, 3)), "1.2.3");
    }
}
