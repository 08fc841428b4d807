//! Content-derived release identifiers

use crate::bundle::Component;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Release identifier (SHA256 over version and sorted components)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReleaseId(String);

impl ReleaseId {
  /// Hash the release version followed by one `name@version` line per component
  ///
  /// Components must already be in canonical (sorted) order.
  pub fn from_parts(version: &str, components: &[Component]) -> Self {
    let mut hasher = Sha256::new();
    hasher.update(version.as_bytes());
    hasher.update(b"\n");
    for c in components {
      hasher.update(c.name.as_bytes());
      hasher.update(b"@");
      hasher.update(c.version.as_bytes());
      hasher.update(b"\n");
    }
    Self(format!("{:x}", hasher.finalize()))
  }

  /// Full hex digest
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Get the short ID (first 12 characters)
  pub fn short(&self) -> &str {
    &self.0[..12.min(self.0.len())]
  }
}

impl fmt::Display for ReleaseId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.short())
  }
}
