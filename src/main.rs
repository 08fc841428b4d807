use clap::{Parser, Subcommand};
use std::path::PathBuf;
use versionbundle::commands::{self, ReleaseSource};
use versionbundle::core::error::{BundleError, print_error};
use versionbundle::release::AggregationPolicy;

/// Aggregate versioned bundles into releases
#[derive(Parser)]
#[command(name = "versionbundle")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  /// Release index file (default: search versionbundle.toml from the current directory)
  #[arg(long, global = true)]
  index: Option<PathBuf>,

  /// Aggregation policy override: trust (caller-supplied values) or compute (derive from bundles)
  #[arg(long, global = true)]
  policy: Option<AggregationPolicy>,

  /// Enable debug logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Show a single release
  Show {
    /// Version of the release to show
    #[arg(id = "release_version", value_name = "VERSION")]
    version: String,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },

  /// List all releases, ascending by version
  List {
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Show the release with the highest version
  Newest {
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();
  versionbundle::logging::init_cli_logger(cli.verbose);

  let source = ReleaseSource {
    index: cli.index,
    policy: cli.policy,
  };

  let result = match cli.command {
    Commands::Show { version, json } => commands::run_show(&source, version, json),
    Commands::List { json } => commands::run_list(&source, json),
    Commands::Newest { json } => commands::run_newest(&source, json),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: BundleError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
