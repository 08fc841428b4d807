//! Release command implementation
//!
//! `show`, `list` and `newest` all load the release index, seal every entry,
//! and render either a human-readable view or JSON.

use crate::bundle::{App, Bundle, Changelog, ChangelogKind, Component};
use crate::core::config::ReleaseIndex;
use crate::core::error::BundleResult;
use crate::release::{AggregationPolicy, Release, find_release, newest_release, sort_by_version};
use serde::Serialize;
use std::env;
use std::path::PathBuf;

/// Where to read releases from and how to seal them
#[derive(Debug, Clone, Default)]
pub struct ReleaseSource {
  /// Explicit index file (otherwise searched from the current directory)
  pub index: Option<PathBuf>,
  /// Override for the index's `settings.policy`
  pub policy: Option<AggregationPolicy>,
}

impl ReleaseSource {
  /// Load the index and build all releases
  pub fn load(&self) -> BundleResult<Vec<Release>> {
    let index = match &self.index {
      Some(path) => ReleaseIndex::load_file(path)?,
      None => ReleaseIndex::load(&env::current_dir()?)?,
    };
    index.build_releases(self.policy)
  }
}

/// Serializable view of a sealed release
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseSummary {
  pub id: String,
  pub version: String,
  pub timestamp: String,
  pub active: bool,
  pub deprecated: bool,
  pub bundles: Vec<Bundle>,
  pub components: Vec<Component>,
  pub apps: Vec<App>,
  pub changelogs: Vec<Changelog>,
}

impl From<&Release> for ReleaseSummary {
  fn from(release: &Release) -> Self {
    Self {
      id: release.id().as_str().to_string(),
      version: release.version().to_string(),
      timestamp: release.timestamp(),
      active: release.active(),
      deprecated: release.deprecated(),
      bundles: release.bundles(),
      components: release.components(),
      apps: release.apps(),
      changelogs: release.changelogs(),
    }
  }
}

/// Run the show command
pub fn run_show(source: &ReleaseSource, version: String, json: bool) -> BundleResult<()> {
  let releases = source.load()?;
  let release = find_release(&releases, &version)?;

  if json {
    println!("{}", serde_json::to_string_pretty(&ReleaseSummary::from(release))?);
  } else {
    print_release(release);
  }

  Ok(())
}

/// Run the list command (ascending by version)
pub fn run_list(source: &ReleaseSource, json: bool) -> BundleResult<()> {
  let mut releases = source.load()?;
  sort_by_version(&mut releases);

  if json {
    let summaries: Vec<ReleaseSummary> = releases.iter().map(ReleaseSummary::from).collect();
    println!("{}", serde_json::to_string_pretty(&summaries)?);
    return Ok(());
  }

  if releases.is_empty() {
    println!("⚠️  No releases in the release index");
    println!();
    println!("Add a release:");
    println!("  [[releases]]");
    println!("  version = \"1.0.0\"");
    println!("  [[releases.bundles]]");
    println!("  name = \"my-operator\"");
    println!("  version = \"1.0.0\"");
    return Ok(());
  }

  println!("📋 Releases");
  println!();
  for release in &releases {
    println!(
      "{} {:<12} {}  {} bundle(s), {} component(s)  [{}]",
      status_icon(release),
      display_version(release),
      display_timestamp(release),
      release.bundles().len(),
      release.components().len(),
      release.id()
    );
  }

  Ok(())
}

/// Run the newest command
pub fn run_newest(source: &ReleaseSource, json: bool) -> BundleResult<()> {
  let releases = source.load()?;
  let newest = newest_release(&releases)?;

  if json {
    println!("{}", serde_json::to_string_pretty(&ReleaseSummary::from(&newest))?);
  } else {
    print_release(&newest);
  }

  Ok(())
}

fn status_icon(release: &Release) -> &'static str {
  if release.deprecated() {
    "⛔"
  } else if release.active() {
    "✅"
  } else {
    "⚪"
  }
}

fn display_version(release: &Release) -> &str {
  if release.version().is_empty() {
    "(none)"
  } else {
    release.version()
  }
}

fn display_timestamp(release: &Release) -> String {
  let ts = release.timestamp();
  if ts.is_empty() { "-".to_string() } else { ts }
}

fn print_release(release: &Release) {
  println!("📦 Release {} [{}]", display_version(release), release.id());
  println!();
  println!("  Timestamp:  {}", display_timestamp(release));
  println!("  Active:     {}", release.active());
  println!("  Deprecated: {}", release.deprecated());
  println!();

  println!("  Bundles:");
  for bundle in release.bundles() {
    let deprecated = if bundle.deprecated { " [DEPRECATED]" } else { "" };
    println!("    {} {}{}", bundle.name, bundle.version, deprecated);
  }
  println!();

  println!("  Components:");
  for component in release.components() {
    println!("    {} {}", component.name, component.version);
  }

  let apps = release.apps();
  if !apps.is_empty() {
    println!();
    println!("  Apps:");
    for app in apps {
      println!("    {} {}", app.name, app.version);
    }
  }

  let changelogs = release.changelogs();
  if !changelogs.is_empty() {
    println!();
    println!("  Changes:");
    for entry in changelogs {
      println!("    {} {}: {}", changelog_icon(entry.kind), entry.component, entry.description);
    }
  }
}

fn changelog_icon(kind: ChangelogKind) -> &'static str {
  match kind {
    ChangelogKind::Added => "✨",
    ChangelogKind::Changed => "🔧",
    ChangelogKind::Deprecated => "⚠️",
    ChangelogKind::Removed => "🗑️",
    ChangelogKind::Fixed => "🐛",
    ChangelogKind::Security => "🔒",
  }
}
