use crate::core::error::{BundleResult, ConfigError, ResultExt};
use crate::release::{AggregationPolicy, Release, ReleaseConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Release index read by the CLI
/// Searched in order: versionbundle.toml, .versionbundle.toml, .config/versionbundle.toml
///
/// Timestamps are RFC 3339 strings and must be quoted, e.g.
/// `time = "2024-01-15T10:00:00Z"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReleaseIndex {
  #[serde(default)]
  pub settings: Settings,
  #[serde(default)]
  pub releases: Vec<ReleaseConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
  /// How releases derive date, version and deprecated flag (default: trust)
  #[serde(default)]
  pub policy: AggregationPolicy,
}

impl ReleaseIndex {
  /// Find index file in search order
  pub fn find_index_path(path: &Path) -> Option<PathBuf> {
    let candidates = [
      path.join("versionbundle.toml"),
      path.join(".versionbundle.toml"),
      path.join(".config").join("versionbundle.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load the index from a directory (searches multiple locations)
  pub fn load(path: &Path) -> BundleResult<Self> {
    let index_path = Self::find_index_path(path).ok_or_else(|| ConfigError::NotFound {
      search_root: path.to_path_buf(),
    })?;

    Self::load_file(&index_path)
  }

  /// Load the index from an explicit file
  pub fn load_file(index_path: &Path) -> BundleResult<Self> {
    let content = fs::read_to_string(index_path)
      .with_context(|| format!("Failed to read release index from {}", index_path.display()))?;
    let index = Self::parse(&content, index_path)?;

    tracing::info!(
      path = %index_path.display(),
      releases = index.releases.len(),
      policy = %index.settings.policy,
      "loaded release index"
    );

    Ok(index)
  }

  /// Parse index content; `origin` is only used for error messages
  pub fn parse(content: &str, origin: &Path) -> BundleResult<Self> {
    toml_edit::de::from_str(content).map_err(|e| {
      ConfigError::Parse {
        path: origin.to_path_buf(),
        message: e.to_string(),
      }
      .into()
    })
  }

  /// Seal every release entry
  ///
  /// `policy` overrides `settings.policy` when given. The first invalid entry
  /// aborts the whole build; its 1-based position prefixes the error.
  pub fn build_releases(&self, policy: Option<AggregationPolicy>) -> BundleResult<Vec<Release>> {
    let policy = policy.unwrap_or(self.settings.policy);

    self
      .releases
      .iter()
      .enumerate()
      .map(|(i, entry)| {
        Release::with_policy(entry.clone(), policy)
          .inspect_err(|e| tracing::warn!(entry = i + 1, error = %e, "invalid release entry"))
          .with_context(|| format!("release #{}", i + 1))
      })
      .collect()
  }
}
