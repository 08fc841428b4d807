//! Bundles, components, and the values that travel with them
//!
//! A bundle is a named, versioned group of components released together.
//! Bundles are supplied already parsed (by the release index loader or by a
//! library caller) and are never mutated once handed to a release.

pub mod aggregate;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use aggregate::{aggregate_changelogs, aggregate_components};

/// A named, versioned leaf unit of software
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Component {
  pub name: String,
  pub version: String,
}

impl Component {
  pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      version: version.into(),
    }
  }
}

/// Kind of change recorded in a changelog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangelogKind {
  Added,
  Changed,
  Deprecated,
  Removed,
  Fixed,
  Security,
}

/// A single changelog line attached to a bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changelog {
  pub component: String,
  pub description: String,
  pub kind: ChangelogKind,
}

/// Opaque application entry carried through a release unchanged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
  pub name: String,
  pub version: String,
}

/// A named, versioned container of components
///
/// `time` is `None` for the zero instant. `version` is expected to be semver;
/// it is only parsed when a release computes its version from its bundles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
  pub name: String,
  pub version: String,
  #[serde(default)]
  pub components: Vec<Component>,
  #[serde(default)]
  pub changelogs: Vec<Changelog>,
  #[serde(default)]
  pub time: Option<DateTime<Utc>>,
  #[serde(default)]
  pub deprecated: bool,
}

impl Bundle {
  /// Create a bundle with no components, changelogs, or timestamp
  pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      version: version.into(),
      components: Vec::new(),
      changelogs: Vec::new(),
      time: None,
      deprecated: false,
    }
  }

  pub fn with_components(mut self, components: Vec<Component>) -> Self {
    self.components = components;
    self
  }

  pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
    self.time = Some(time);
    self
  }

  pub fn with_deprecated(mut self, deprecated: bool) -> Self {
    self.deprecated = deprecated;
    self
  }

  pub fn with_changelogs(mut self, changelogs: Vec<Changelog>) -> Self {
    self.changelogs = changelogs;
    self
  }

  /// The bundle itself, viewed as a component of the release it belongs to
  pub fn as_component(&self) -> Component {
    Component::new(self.name.clone(), self.version.clone())
  }
}

/// Stable sort of components by name (byte-wise)
pub fn sort_components_by_name(components: &mut [Component]) {
  components.sort_by(|a, b| a.name.cmp(&b.name));
}
