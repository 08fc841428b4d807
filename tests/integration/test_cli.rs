//! Integration tests for the versionbundle CLI

use crate::helpers::{SAMPLE_INDEX, TestIndex, run_versionbundle, run_versionbundle_raw};
use anyhow::Result;

#[test]
fn test_newest_json() -> Result<()> {
  let index = TestIndex::with_content(SAMPLE_INDEX)?;

  let output = run_versionbundle(&index.path, &["newest", "--json"])?;
  let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;

  assert_eq!(json["version"], "2.3.1");
  assert_eq!(json["timestamp"], "2018-03-01T12:00:00.000000Z");
  assert_eq!(json["active"], true);

  let names: Vec<_> = json["components"]
    .as_array()
    .unwrap()
    .iter()
    .map(|c| c["name"].as_str().unwrap().to_string())
    .collect();
  assert_eq!(names, vec!["aws-operator", "aws-sdk", "cert-operator"]);
  assert_eq!(json["apps"][0]["name"], "nginx-ingress-controller");
  assert_eq!(json["changelogs"][0]["kind"], "changed");

  Ok(())
}

#[test]
fn test_newest_human_readable() -> Result<()> {
  let index = TestIndex::with_content(SAMPLE_INDEX)?;

  let output = run_versionbundle(&index.path, &["newest"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("Release 2.3.1"), "unexpected output: {}", stdout);
  assert!(stdout.contains("aws-sdk 0.5.0"));
  assert!(stdout.contains("nginx-ingress-controller"));

  Ok(())
}

#[test]
fn test_list_sorted_by_version() -> Result<()> {
  let index = TestIndex::with_content(SAMPLE_INDEX)?;

  let output = run_versionbundle(&index.path, &["list", "--json"])?;
  let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
  let versions: Vec<_> = json
    .as_array()
    .unwrap()
    .iter()
    .map(|r| r["version"].as_str().unwrap().to_string())
    .collect();

  assert_eq!(versions, vec!["1.0.0", "2.3.0", "2.3.1"]);

  Ok(())
}

#[test]
fn test_list_empty_index() -> Result<()> {
  let index = TestIndex::with_content("")?;

  let output = run_versionbundle(&index.path, &["list", "--json"])?;
  let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
  assert_eq!(json, serde_json::json!([]));

  let output = run_versionbundle(&index.path, &["list"])?;
  assert!(String::from_utf8_lossy(&output.stdout).contains("No releases"));

  Ok(())
}

#[test]
fn test_show_release() -> Result<()> {
  let index = TestIndex::with_content(SAMPLE_INDEX)?;

  let output = run_versionbundle(&index.path, &["show", "2.3.0", "--json"])?;
  let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
  assert_eq!(json["version"], "2.3.0");
  assert_eq!(json["bundles"][0]["version"], "1.1.0");

  Ok(())
}

#[test]
fn test_show_unknown_release_fails() -> Result<()> {
  let index = TestIndex::with_content(SAMPLE_INDEX)?;

  let output = run_versionbundle_raw(&index.path, &["show", "9.9.9"])?;
  assert_eq!(output.status.code(), Some(3));
  assert!(String::from_utf8_lossy(&output.stderr).contains("9.9.9"));

  Ok(())
}

#[test]
fn test_newest_empty_index_is_execution_error() -> Result<()> {
  let index = TestIndex::with_content("")?;

  let output = run_versionbundle_raw(&index.path, &["newest"])?;
  assert_eq!(output.status.code(), Some(3));
  assert!(String::from_utf8_lossy(&output.stderr).contains("releases must not be empty"));

  Ok(())
}

#[test]
fn test_release_without_bundles_is_config_error() -> Result<()> {
  let index = TestIndex::with_content("[[releases]]\nversion = \"1.0.0\"\n")?;

  let output = run_versionbundle_raw(&index.path, &["list"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&output.stderr).contains("release #1: Bundles must not be empty"));

  Ok(())
}

#[test]
fn test_missing_index_is_config_error() -> Result<()> {
  let index = TestIndex::empty()?;

  let output = run_versionbundle_raw(&index.path, &["list"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&output.stderr).contains("No release index found"));

  Ok(())
}

#[test]
fn test_unreadable_index_is_system_error() -> Result<()> {
  let index = TestIndex::empty()?;

  let output = run_versionbundle_raw(&index.path, &["--index", "missing.toml", "list"])?;
  assert_eq!(output.status.code(), Some(2));
  assert!(String::from_utf8_lossy(&output.stderr).contains("missing.toml"));

  Ok(())
}

#[test]
fn test_compute_policy_overflow_is_config_error() -> Result<()> {
  let index = TestIndex::with_content(
    r#"
[[releases]]
[[releases.bundles]]
name = "huge-operator"
version = "18446744073709551615.0.0"

[[releases.bundles]]
name = "cert-operator"
version = "1.0.0"
"#,
  )?;

  let output = run_versionbundle_raw(&index.path, &["--policy", "compute", "newest"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&output.stderr).contains("overflows"));

  Ok(())
}

#[test]
fn test_explicit_index_and_compute_policy() -> Result<()> {
  let index = TestIndex::empty()?;
  let file = index.write("releases/index.toml", SAMPLE_INDEX)?;
  let file = file.to_string_lossy().to_string();

  let output = run_versionbundle(&index.path, &["--index", &file, "--policy", "compute", "list", "--json"])?;
  let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
  let versions: Vec<_> = json
    .as_array()
    .unwrap()
    .iter()
    .map(|r| r["version"].as_str().unwrap().to_string())
    .collect();

  // Summed bundle versions: 1.0.0, 1.1.0, and 1.2.0 + 0.1.0
  assert_eq!(versions, vec!["1.0.0", "1.1.0", "1.3.0"]);
  assert_eq!(json[2]["timestamp"], "2018-02-28T09:30:00.000000Z");

  Ok(())
}

#[test]
fn test_index_in_config_dir() -> Result<()> {
  let index = TestIndex::empty()?;
  index.write(".config/versionbundle.toml", SAMPLE_INDEX)?;

  let output = run_versionbundle(&index.path, &["newest", "--json"])?;
  let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
  assert_eq!(json["version"], "2.3.1");

  Ok(())
}
