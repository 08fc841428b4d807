//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A scratch directory holding a release index
pub struct TestIndex {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestIndex {
  /// Create an empty directory with no index file
  pub fn empty() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    Ok(Self { _root: root, path })
  }

  /// Create a directory with `versionbundle.toml` holding `content`
  pub fn with_content(content: &str) -> Result<Self> {
    let index = Self::empty()?;
    index.write("versionbundle.toml", content)?;
    Ok(index)
  }

  /// Write a file relative to the index directory
  pub fn write(&self, name: &str, content: &str) -> Result<PathBuf> {
    let file = self.path.join(name);
    if let Some(parent) = file.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&file, content)?;
    Ok(file)
  }
}

/// Index with three releases and the aws/cert bundle example
pub const SAMPLE_INDEX: &str = r#"
[[releases]]
version = "1.0.0"
date = "2018-01-01T00:00:00Z"

[[releases.bundles]]
name = "kvm-operator"
version = "1.0.0"

[[releases]]
version = "2.3.1"
date = "2018-03-01T12:00:00Z"
active = true

[[releases.bundles]]
name = "aws-operator"
version = "1.2.0"
time = "2018-02-27T08:00:00Z"

[[releases.bundles.components]]
name = "aws-sdk"
version = "0.5.0"

[[releases.bundles.changelogs]]
component = "aws-sdk"
description = "Update SDK to 0.5.0."
kind = "changed"

[[releases.bundles]]
name = "cert-operator"
version = "0.1.0"
time = "2018-02-28T09:30:00Z"

[[releases.apps]]
name = "nginx-ingress-controller"
version = "0.10.2"

[[releases]]
version = "2.3.0"
date = "2018-02-01T00:00:00Z"

[[releases.bundles]]
name = "aws-operator"
version = "1.1.0"
"#;

/// Run the versionbundle binary, failing on non-zero exit
pub fn run_versionbundle(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = run_versionbundle_raw(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "versionbundle command failed: versionbundle {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Run the versionbundle binary and return its output regardless of status
pub fn run_versionbundle_raw(cwd: &Path, args: &[&str]) -> Result<Output> {
  let bin = env!("CARGO_BIN_EXE_versionbundle");

  Command::new(bin)
    .current_dir(cwd)
    .args(args)
    .env_remove("RUST_LOG")
    .output()
    .context("Failed to run versionbundle")
}
