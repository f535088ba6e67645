//! Shared fixtures: a working clone wired to a local bare "origin".

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Runs git in `dir`, asserting success, and returns trimmed stdout.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

pub fn manifest_json(version: &str) -> String {
    format!(
        "{{\n  \"name\": \"demo\",\n  \"version\": \"{}\",\n  \"private\": true\n}}\n",
        version
    )
}

pub struct Fixture {
    _tmp: TempDir,
    pub remote: PathBuf,
    pub work: PathBuf,
}

impl Fixture {
    pub fn manifest(&self) -> String {
        fs::read_to_string(self.work.join("package.json")).expect("failed to read manifest")
    }
}

/// Creates `remote.git` (bare) and `work` (on `main`, manifest at `version`),
/// with every branch in `branches` pushed and tracking origin.
pub fn fixture(version: &str, branches: &[&str]) -> Fixture {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let remote = tmp.path().join("remote.git");
    let work = tmp.path().join("work");

    git(tmp.path(), &["init", "-q", "--bare", "remote.git"]);
    git(tmp.path(), &["init", "-q", "work"]);

    git(&work, &["config", "user.email", "test@example.com"]);
    git(&work, &["config", "user.name", "Test User"]);
    git(&work, &["config", "commit.gpgsign", "false"]);
    git(&work, &["config", "tag.gpgsign", "false"]);
    git(&work, &["config", "pull.rebase", "false"]);
    git(&work, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    fs::write(work.join("package.json"), manifest_json(version)).expect("failed to write manifest");
    git(&work, &["add", "package.json"]);
    git(&work, &["commit", "-q", "-m", "initial commit"]);

    let remote_url = remote.to_string_lossy().into_owned();
    git(&work, &["remote", "add", "origin", &remote_url]);
    git(&work, &["push", "-q", "-u", "origin", "main"]);

    for branch in branches {
        git(&work, &["branch", branch]);
        git(&work, &["push", "-q", "-u", "origin", branch]);
    }

    Fixture {
        _tmp: tmp,
        remote,
        work,
    }
}
