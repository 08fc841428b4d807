//! CLI commands for versionbundle
//!
//! ## Releases
//! - **show**: Print a single release from the index
//! - **list**: Print every release, ascending by version
//! - **newest**: Print the release with the highest version

pub mod release;

pub use release::{ReleaseSource, run_list, run_newest, run_show};
