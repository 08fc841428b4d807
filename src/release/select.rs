//! Ordering releases by semantic version
//!
//! All helpers are stateless comparators over [`Release`] values. Sorting is
//! always stable, so releases with equal versions keep their relative order.

use crate::core::error::{BundleResult, ExecutionError};
use crate::release::Release;
use std::cmp::Ordering;

/// Compare two version strings by semver precedence
///
/// Build metadata is ignored. Strings that fail to parse sort before every
/// valid version and compare byte-wise among themselves, so the order stays
/// total.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
  match (semver::Version::parse(a), semver::Version::parse(b)) {
    (Ok(va), Ok(vb)) => va.cmp_precedence(&vb),
    (Ok(_), Err(_)) => Ordering::Greater,
    (Err(_), Ok(_)) => Ordering::Less,
    (Err(_), Err(_)) => a.cmp(b),
  }
}

/// Comparator for sorting releases by version
pub fn by_version(a: &Release, b: &Release) -> Ordering {
  compare_versions(a.version(), b.version())
}

/// Stable ascending sort of releases by version
pub fn sort_by_version(releases: &mut [Release]) {
  releases.sort_by(by_version);
}

/// Pick the release with the highest version
///
/// Among releases sharing the highest version, the one appearing last in the
/// input wins. The input slice is left untouched.
pub fn newest_release(releases: &[Release]) -> BundleResult<Release> {
  let mut sorted = releases.to_vec();
  sort_by_version(&mut sorted);

  let newest = sorted.pop().ok_or(ExecutionError::EmptyReleases)?;
  tracing::debug!(version = newest.version(), candidates = releases.len(), "selected newest release");
  Ok(newest)
}

/// Find the release with exactly the given version string
pub fn find_release<'a>(releases: &'a [Release], version: &str) -> BundleResult<&'a Release> {
  releases
    .iter()
    .find(|r| r.version() == version)
    .ok_or_else(|| {
      ExecutionError::ReleaseNotFound {
        version: version.to_string(),
      }
      .into()
    })
}
