//! Log subscriber setup for the binary
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! binary's job. Logs go to stderr so JSON output on stdout stays clean.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a compact stderr logger; `RUST_LOG` wins over `verbose`
pub fn init_cli_logger(verbose: bool) {
  let default_filter = if verbose {
    "versionbundle=debug"
  } else {
    "versionbundle=warn"
  };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

  let _ = tracing_subscriber::registry()
    .with(filter)
    .with(
      tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact(),
    )
    .try_init();
}
