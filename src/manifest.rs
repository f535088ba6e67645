//! Reads and writes the `version` field of a JSON package manifest.
//!
//! The whole document is read on every call and rewritten in full on update,
//! so unrelated fields survive untouched (key order included). Writes are a
//! plain overwrite, not a temp-file-and-rename: a crash mid-write can leave a
//! truncated manifest behind.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::Version;
use crate::error::{Result, VbumpError};

/// Default manifest location, relative to the project root
pub const DEFAULT_MANIFEST: &str = "package.json";

const VERSION_KEY: &str = "version";

fn read_document(path: &Path) -> Result<Map<String, Value>> {
    if !path.exists() {
        return Err(VbumpError::ManifestNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let document: Value =
        serde_json::from_str(&content).map_err(|e| VbumpError::ManifestParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    match document {
        Value::Object(map) => Ok(map),
        _ => Err(VbumpError::MissingVersionField(path.to_path_buf())),
    }
}

/// Returns the raw `version` string stored in the manifest.
pub fn read_version_string(path: &Path) -> Result<String> {
    let document = read_document(path)?;
    match document.get(VERSION_KEY) {
        Some(Value::String(version)) => Ok(version.clone()),
        _ => Err(VbumpError::MissingVersionField(path.to_path_buf())),
    }
}

/// Reads and parses the manifest's current version.
///
/// # Errors
/// * `ManifestNotFound` - the file does not exist
/// * `ManifestParse` - the file is not valid JSON
/// * `MissingVersionField` - no string `version` at the top level
/// * `InvalidVersionFormat` - the version is not `X.Y.Z`
pub fn get_current_version(path: &Path) -> Result<Version> {
    Version::parse(&read_version_string(path)?)
}

/// Replaces the manifest's `version` with `new_version`.
///
/// The document is re-read immediately before writing and serialized with
/// 2-space indentation plus a trailing newline.
pub fn update_version(path: &Path, new_version: &Version) -> Result<()> {
    let mut document = read_document(path)?;

    match document.get_mut(VERSION_KEY) {
        Some(slot) if slot.is_string() => *slot = Value::String(new_version.to_string()),
        _ => return Err(VbumpError::MissingVersionField(path.to_path_buf())),
    }

    let mut content = serde_json::to_string_pretty(&Value::Object(document))?;
    content.push('\n');
    fs::write(path, content)?;

    debug!(manifest = %path.display(), version = %new_version, "manifest updated");
    Ok(())
}
