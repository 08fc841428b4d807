//! Error types for versionbundle with contextual messages and exit codes
//!
//! Errors fall into two kinds: configuration errors raised while sealing a
//! release from its inputs, and execution errors raised when an operation is
//! handed a collection it cannot work on. I/O and free-form messages only
//! appear around the loader and CLI.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for versionbundle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// Configuration error (bad index, empty bundles, invalid versions)
  Config = 1,
  /// System error (I/O)
  System = 2,
  /// Execution error (empty release set, unknown release)
  Execution = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for versionbundle
#[derive(Debug)]
pub enum BundleError {
  /// Invalid input for constructing a release
  Config(ConfigError),

  /// An operation was invoked on input it cannot process
  Execution(ExecutionError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message { message: String, context: Option<String> },
}

impl BundleError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    BundleError::Message {
      message: msg.into(),
      context: None,
    }
  }

  /// Add context to an existing error
  ///
  /// The error kind (and therefore the exit code) never changes.
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      BundleError::Message { message, context } => BundleError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
      },
      BundleError::Io(e) => BundleError::Io(io::Error::new(e.kind(), format!("{}: {}", ctx_str, e))),
      BundleError::Config(e) => BundleError::Config(ConfigError::Context {
        context: ctx_str,
        source: Box::new(e),
      }),
      BundleError::Execution(e) => BundleError::Execution(e),
    }
  }

  /// True if this is a configuration error
  pub fn is_config_error(&self) -> bool {
    matches!(self, BundleError::Config(_))
  }

  /// True if this is an execution error
  pub fn is_execution_error(&self) -> bool {
    matches!(self, BundleError::Execution(_))
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      BundleError::Config(_) => ExitCode::Config,
      BundleError::Execution(_) => ExitCode::Execution,
      BundleError::Io(_) => ExitCode::System,
      BundleError::Message { .. } => ExitCode::Config,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      BundleError::Config(e) => e.help_message(),
      BundleError::Execution(e) => e.help_message(),
      BundleError::Message { .. } | BundleError::Io(_) => None,
    }
  }
}

impl fmt::Display for BundleError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BundleError::Config(e) => write!(f, "{}", e),
      BundleError::Execution(e) => write!(f, "{}", e),
      BundleError::Io(e) => write!(f, "I/O error: {}", e),
      BundleError::Message { message, context } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for BundleError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      BundleError::Io(e) => Some(e),
      BundleError::Config(e) => e.semver_source().map(|s| s as &(dyn std::error::Error + 'static)),
      _ => None,
    }
  }
}

impl From<ConfigError> for BundleError {
  fn from(err: ConfigError) -> Self {
    BundleError::Config(err)
  }
}

impl From<ExecutionError> for BundleError {
  fn from(err: ExecutionError) -> Self {
    BundleError::Execution(err)
  }
}

impl From<io::Error> for BundleError {
  fn from(err: io::Error) -> Self {
    BundleError::Io(err)
  }
}

impl From<serde_json::Error> for BundleError {
  fn from(err: serde_json::Error) -> Self {
    BundleError::message(format!("JSON error: {}", err))
  }
}

/// Release configuration errors
#[derive(Debug)]
pub enum ConfigError {
  /// A release needs at least one bundle
  EmptyBundles,

  /// A bundle version failed semver parsing while aggregating
  InvalidBundleVersion {
    bundle: String,
    version: String,
    source: semver::Error,
  },

  /// No release index in any searched location
  NotFound { search_root: PathBuf },

  /// Release index could not be parsed
  Parse { path: PathBuf, message: String },

  /// Summing bundle versions overflowed a version part
  VersionOverflow { bundle: String, part: &'static str },

  /// Another config error, annotated with where it happened
  Context { context: String, source: Box<ConfigError> },
}

impl ConfigError {
  /// Semver parse failure at the root of this error, if any
  pub fn semver_source(&self) -> Option<&semver::Error> {
    match self {
      ConfigError::InvalidBundleVersion { source, .. } => Some(source),
      ConfigError::Context { source, .. } => source.semver_source(),
      _ => None,
    }
  }

  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::EmptyBundles => Some("Add at least one [[releases.bundles]] entry to the release.".to_string()),
      ConfigError::InvalidBundleVersion { .. } => {
        Some("Bundle versions must be valid semver (e.g. '1.2.0') when the compute policy is used.".to_string())
      }
      ConfigError::NotFound { .. } => {
        Some("Create versionbundle.toml or pass an explicit path with --index.".to_string())
      }
      ConfigError::VersionOverflow { .. } => {
        Some("The compute policy sums bundle versions; use the trust policy for releases this large.".to_string())
      }
      ConfigError::Parse { .. } => None,
      ConfigError::Context { source, .. } => source.help_message(),
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::EmptyBundles => write!(f, "Bundles must not be empty"),
      ConfigError::InvalidBundleVersion {
        bundle,
        version,
        source,
      } => {
        write!(f, "Bundle '{}' has invalid version '{}': {}", bundle, version, source)
      }
      ConfigError::NotFound { search_root } => {
        let root = search_root.display();
        write!(
          f,
          "No release index found.\nSearched: {root}/versionbundle.toml, {root}/.versionbundle.toml, {root}/.config/versionbundle.toml"
        )
      }
      ConfigError::Parse { path, message } => {
        write!(f, "Failed to parse release index {}: {}", path.display(), message)
      }
      ConfigError::VersionOverflow { bundle, part } => {
        write!(f, "Summing bundle versions overflows the {} part at bundle '{}'", part, bundle)
      }
      ConfigError::Context { context, source } => write!(f, "{}: {}", context, source),
    }
  }
}

/// Errors raised by operations over release collections
#[derive(Debug)]
pub enum ExecutionError {
  /// Newest-release selection was given nothing to select from
  EmptyReleases,

  /// No release carries the requested version
  ReleaseNotFound { version: String },
}

impl ExecutionError {
  fn help_message(&self) -> Option<String> {
    match self {
      ExecutionError::EmptyReleases => Some("Add a [[releases]] entry to the release index.".to_string()),
      ExecutionError::ReleaseNotFound { .. } => {
        Some("Run `versionbundle list` to see the available versions.".to_string())
      }
    }
  }
}

impl fmt::Display for ExecutionError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ExecutionError::EmptyReleases => write!(f, "releases must not be empty"),
      ExecutionError::ReleaseNotFound { version } => write!(f, "Release '{}' not found", version),
    }
  }
}

/// Result type alias for versionbundle
pub type BundleResult<T> = Result<T, BundleError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> BundleResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> BundleResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<BundleError>,
{
  fn context(self, ctx: impl Into<String>) -> BundleResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> BundleResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &BundleError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
