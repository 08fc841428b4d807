//! Release aggregation and selection
//!
//! # Core Invariants
//!
//! 1. **A release always has at least one bundle**
//!    - Construction with an empty bundle list fails with a config error
//!    - No partially built release is ever returned
//!
//! 2. **Components are derived, never set**
//!    - Each bundle contributes itself plus its own components
//!    - The list is stable-sorted by name, duplicates kept
//!
//! 3. **Releases are immutable once sealed**
//!    - Sequence accessors return owned copies
//!
//! # Aggregation policies
//!
//! - `trust` (default): date, version and deprecated flag come from the caller
//! - `compute`: latest bundle time, summed bundle versions, any-deprecated
//!
//! # Ordering
//!
//! Releases are ranked by semver precedence of their version string. See
//! [`select::newest_release`].

pub mod descriptor;
pub mod id;
pub mod select;

pub use descriptor::{AggregationPolicy, Release, ReleaseConfig, TIMESTAMP_FORMAT};
pub use id::ReleaseId;
pub use select::{by_version, compare_versions, find_release, newest_release, sort_by_version};
