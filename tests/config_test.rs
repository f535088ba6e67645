// tests/config_test.rs
use std::io::Write;
use std::path::PathBuf;

use tempfile::{NamedTempFile, TempDir};
use vbump::config::{
    load_config, parse_target_branches, resolve, write_config, PartialConfig, ReleaseConfig,
    CONFIG_FILE_NAME,
};
use vbump::VbumpError;

#[test]
fn test_load_from_explicit_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let json_content = r#"{
  "sourceBranch": "main",
  "targetBranches": ["develop", "staging"],
  "commitMessageTemplate": "release {version}",
  "tagPrefix": "rel-"
}"#;
    temp_file.write_all(json_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let root = TempDir::new().unwrap();
    let config = load_config(root.path(), Some(temp_file.path()))
        .unwrap()
        .expect("config should be found");

    assert_eq!(config.source_branch.as_deref(), Some("main"));
    assert_eq!(
        config.target_branches,
        Some(vec!["develop".to_string(), "staging".to_string()])
    );
    assert_eq!(
        config.commit_message_template.as_deref(),
        Some("release {version}")
    );
    assert_eq!(config.tag_prefix.as_deref(), Some("rel-"));
    assert_eq!(config.create_tag, None);
    assert_eq!(config.manifest_path, None);
}

#[test]
fn test_project_file_found_in_root() {
    let root = TempDir::new().unwrap();
    std::fs::write(
        root.path().join(CONFIG_FILE_NAME),
        r#"{ "createTag": false }"#,
    )
    .unwrap();

    let config = load_config(root.path(), None).unwrap().unwrap();
    assert_eq!(config.create_tag, Some(false));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let root = TempDir::new().unwrap();
    std::fs::write(
        root.path().join(CONFIG_FILE_NAME),
        r#"{ "tagPrefix": "x", "somethingElse": 42 }"#,
    )
    .unwrap();

    let config = load_config(root.path(), None).unwrap().unwrap();
    assert_eq!(config.tag_prefix.as_deref(), Some("x"));
}

#[test]
fn test_wrong_type_is_a_load_failure() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(br#"{ "createTag": "yes" }"#).unwrap();
    temp_file.flush().unwrap();

    let root = TempDir::new().unwrap();
    let err = load_config(root.path(), Some(temp_file.path())).unwrap_err();
    assert!(matches!(err, VbumpError::ConfigLoadFailed { .. }));
}

#[test]
fn test_persisted_file_feeds_resolution() {
    let root = TempDir::new().unwrap();
    std::fs::write(
        root.path().join(CONFIG_FILE_NAME),
        r#"{ "targetBranches": ["develop"], "manifestPath": "app/package.json" }"#,
    )
    .unwrap();
    let persisted = load_config(root.path(), None).unwrap();

    let overrides = PartialConfig {
        target_branches: Some(parse_target_branches("staging, production")),
        ..Default::default()
    };
    let config = resolve(ReleaseConfig::default(), persisted, overrides);

    assert_eq!(config.target_branches, vec!["staging", "production"]);
    assert_eq!(config.manifest_path, PathBuf::from("app/package.json"));
    assert_eq!(config.tag_prefix, "v");
    assert!(config.create_tag);
}

#[test]
fn test_written_config_loads_back() {
    let root = TempDir::new().unwrap();
    let path = root.path().join(CONFIG_FILE_NAME);
    let defaults = ReleaseConfig::default();

    write_config(&path, &PartialConfig::from(&defaults)).unwrap();
    let loaded = load_config(root.path(), None).unwrap();

    assert_eq!(resolve(ReleaseConfig::default(), loaded, PartialConfig::default()), defaults);
    assert!(std::fs::read_to_string(&path).unwrap().contains("\"commitMessageTemplate\""));
}
