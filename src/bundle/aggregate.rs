//! Flattening bundles into release-level data
//!
//! Everything here is pure. Only the version sum can fail; validation of the
//! bundle list (non-empty) happens one layer up, in release construction.

use super::{Bundle, Changelog, Component, sort_components_by_name};
use crate::core::error::{BundleResult, ConfigError};
use chrono::{DateTime, Utc};

/// Flatten bundles into the canonical component list of a release
///
/// Each bundle contributes itself as a component followed by its own
/// components, then the whole list is stable-sorted by name. Duplicate names
/// are kept.
pub fn aggregate_components(bundles: &[Bundle]) -> Vec<Component> {
  let capacity = bundles.iter().map(|b| 1 + b.components.len()).sum();
  let mut components = Vec::with_capacity(capacity);

  for bundle in bundles {
    components.push(bundle.as_component());
    components.extend(bundle.components.iter().cloned());
  }

  sort_components_by_name(&mut components);
  tracing::debug!(bundles = bundles.len(), components = components.len(), "aggregated components");

  components
}

/// Collect changelogs of all bundles in bundle order
pub fn aggregate_changelogs(bundles: &[Bundle]) -> Vec<Changelog> {
  bundles.iter().flat_map(|b| b.changelogs.iter().cloned()).collect()
}

/// A release is deprecated as soon as one of its bundles is
pub fn aggregate_deprecated(bundles: &[Bundle]) -> bool {
  bundles.iter().any(|b| b.deprecated)
}

/// Latest bundle time, or `None` when no bundle carries one
pub fn aggregate_timestamp(bundles: &[Bundle]) -> Option<DateTime<Utc>> {
  bundles.iter().filter_map(|b| b.time).max()
}

/// Sum major, minor, and patch across all bundle versions
///
/// Pre-release and build metadata are dropped. The first bundle whose version
/// does not parse, or whose parts overflow the running sum, fails the whole
/// aggregation.
pub fn aggregate_version(bundles: &[Bundle]) -> BundleResult<String> {
  let (mut major, mut minor, mut patch) = (0u64, 0u64, 0u64);

  for bundle in bundles {
    let v = semver::Version::parse(&bundle.version).map_err(|source| ConfigError::InvalidBundleVersion {
      bundle: bundle.name.clone(),
      version: bundle.version.clone(),
      source,
    })?;

    let overflow = |part| ConfigError::VersionOverflow {
      bundle: bundle.name.clone(),
      part,
    };
    major = major.checked_add(v.major).ok_or_else(|| overflow("major"))?;
    minor = minor.checked_add(v.minor).ok_or_else(|| overflow("minor"))?;
    patch = patch.checked_add(v.patch).ok_or_else(|| overflow("patch"))?;
  }

  Ok(format!("{}.{}.{}", major, minor, patch))
}
