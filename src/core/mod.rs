//! Core plumbing shared by the library and the CLI
//!
//! - **config**: release index (versionbundle.toml) discovery and parsing
//! - **error**: error kinds with contextual help messages and exit codes

pub mod config;
pub mod error;
