//! The sealed release value and its factory

use crate::bundle::aggregate::{aggregate_deprecated, aggregate_timestamp, aggregate_version};
use crate::bundle::{App, Bundle, Changelog, Component, aggregate_changelogs, aggregate_components};
use crate::core::error::{BundleResult, ConfigError};
use crate::release::id::ReleaseId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Timestamp layout used for every serialized release time (UTC, microseconds)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Where a release takes its date, version, and deprecated flag from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationPolicy {
  /// Store the values from the release config verbatim
  #[default]
  #[serde(alias = "trust-caller")]
  Trust,
  /// Derive them from the bundles (latest time, summed version, any deprecated)
  #[serde(alias = "compute-from-bundles")]
  Compute,
}

impl fmt::Display for AggregationPolicy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AggregationPolicy::Trust => write!(f, "trust"),
      AggregationPolicy::Compute => write!(f, "compute"),
    }
  }
}

impl FromStr for AggregationPolicy {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "trust" | "trust-caller" => Ok(AggregationPolicy::Trust),
      "compute" | "compute-from-bundles" => Ok(AggregationPolicy::Compute),
      other => Err(format!("Unknown aggregation policy '{}'. Must be 'trust' or 'compute'", other)),
    }
  }
}

/// Input record for building a release
///
/// `bundles` is the only required field. `date`, `version`, `active` and
/// `deprecated` are only consulted according to the [`AggregationPolicy`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReleaseConfig {
  #[serde(default)]
  pub bundles: Vec<Bundle>,
  #[serde(default)]
  pub apps: Vec<App>,
  #[serde(default)]
  pub date: Option<DateTime<Utc>>,
  #[serde(default)]
  pub version: Option<String>,
  #[serde(default)]
  pub active: bool,
  #[serde(default)]
  pub deprecated: bool,
}

/// Immutable aggregate of bundles and apps
///
/// Construct with [`Release::new`] or [`Release::with_policy`]. Sequence
/// accessors hand out owned copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
  bundles: Vec<Bundle>,
  apps: Vec<App>,
  components: Vec<Component>,
  changelogs: Vec<Changelog>,
  timestamp: Option<DateTime<Utc>>,
  version: String,
  active: bool,
  deprecated: bool,
}

impl Release {
  /// Build a release trusting the caller-supplied date, version and flags
  pub fn new(config: ReleaseConfig) -> BundleResult<Self> {
    Self::with_policy(config, AggregationPolicy::default())
  }

  /// Build a release using the given aggregation policy
  pub fn with_policy(config: ReleaseConfig, policy: AggregationPolicy) -> BundleResult<Self> {
    if config.bundles.is_empty() {
      return Err(ConfigError::EmptyBundles.into());
    }

    let components = aggregate_components(&config.bundles);
    let changelogs = aggregate_changelogs(&config.bundles);

    let (timestamp, version, deprecated) = match policy {
      AggregationPolicy::Trust => (config.date, config.version.unwrap_or_default(), config.deprecated),
      AggregationPolicy::Compute => {
        if config.version.is_some() || config.date.is_some() {
          tracing::warn!("release config supplies version or date, ignored by the compute policy");
        }
        (
          aggregate_timestamp(&config.bundles),
          aggregate_version(&config.bundles)?,
          aggregate_deprecated(&config.bundles),
        )
      }
    };

    tracing::debug!(%policy, %version, bundles = config.bundles.len(), "sealed release");

    Ok(Self {
      bundles: config.bundles,
      apps: config.apps,
      components,
      changelogs,
      timestamp,
      version,
      active: config.active,
      deprecated,
    })
  }

  pub fn bundles(&self) -> Vec<Bundle> {
    self.bundles.clone()
  }

  pub fn apps(&self) -> Vec<App> {
    self.apps.clone()
  }

  /// Flattened, name-sorted components (bundles included as components)
  pub fn components(&self) -> Vec<Component> {
    self.components.clone()
  }

  pub fn changelogs(&self) -> Vec<Changelog> {
    self.changelogs.clone()
  }

  /// Release time formatted as `YYYY-MM-DDTHH:MM:SS.ffffffZ`
  ///
  /// Returns an empty string when the release carries no time.
  pub fn timestamp(&self) -> String {
    self
      .timestamp
      .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
      .unwrap_or_default()
  }

  /// Raw release time
  pub fn time(&self) -> Option<DateTime<Utc>> {
    self.timestamp
  }

  pub fn version(&self) -> &str {
    &self.version
  }

  pub fn active(&self) -> bool {
    self.active
  }

  pub fn deprecated(&self) -> bool {
    self.deprecated
  }

  /// Content identifier over version and components
  pub fn id(&self) -> ReleaseId {
    ReleaseId::from_parts(&self.version, &self.components)
  }
}
