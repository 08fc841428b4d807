//! Aggregate versioned bundles into releases and rank releases by version
//!
//! ```rust,ignore
//! use versionbundle::bundle::{Bundle, Component};
//! use versionbundle::release::{Release, ReleaseConfig, newest_release};
//!
//! let release = Release::new(ReleaseConfig {
//!   bundles: vec![Bundle::new("aws-operator", "1.2.0").with_components(vec![Component::new("aws-sdk", "0.5.0")])],
//!   version: Some("1.0.0".to_string()),
//!   ..Default::default()
//! })?;
//!
//! let newest = newest_release(&[release])?;
//! ```

pub mod bundle;
pub mod commands;
pub mod core;
pub mod logging;
pub mod release;

pub use crate::core::error::{BundleError, BundleResult, ConfigError, ExecutionError};
