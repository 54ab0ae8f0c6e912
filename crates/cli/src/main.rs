mod cmd;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use pathos_lib::config::Config;
use pathos_lib::path::PathStyle;
use tracing_subscriber::EnvFilter;

use cmd::PathOp;
use output::OutputFormat;

/// pathos - POSIX and Windows path manipulation from the command line
#[derive(Parser)]
#[command(name = "pathos")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable debug logging
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Path grammar to use (overrides PATHOS_PATH_STYLE)
  #[arg(long, global = true, value_enum)]
  style: Option<StyleArg>,

  /// Working directory for resolve and relative (overrides PATHOS_CWD)
  #[arg(long, global = true)]
  cwd: Option<String>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StyleArg {
  Posix,
  #[value(alias = "win32")]
  Windows,
  Native,
}

impl From<StyleArg> for PathStyle {
  fn from(style: StyleArg) -> Self {
    match style {
      StyleArg::Posix => PathStyle::Posix,
      StyleArg::Windows => PathStyle::Windows,
      StyleArg::Native => PathStyle::Native,
    }
  }
}

#[derive(Subcommand)]
enum Commands {
  /// Run a single path operation
  Path {
    #[command(subcommand)]
    op: PathOp,
  },

  /// Show host information
  Os {
    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,
  },

  /// Evaluate a Lua script with the `pathos` global installed
  Run {
    /// Script to evaluate
    script: PathBuf,
  },

  /// Walk through every path operation with worked examples
  Tour,

  /// Show version, platform and active configuration
  Info {
    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,
  },
}

fn init_tracing(verbose: bool) {
  let filter = if verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
  };

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn run(cli: Cli) -> Result<()> {
  let config = Config::from_env().with_overrides(cli.style.map(PathStyle::from), cli.cwd);

  match cli.command {
    Commands::Path { op } => cmd::cmd_path(&config.engine()?, op),
    Commands::Os { format } => cmd::cmd_os(format),
    Commands::Run { script } => cmd::cmd_run(&config, &script),
    Commands::Tour => cmd::cmd_tour(),
    Commands::Info { format } => cmd::cmd_info(&config, format),
  }
}

fn main() {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  if let Err(err) = run(cli) {
    output::print_error(&format!("{err:#}"));
    std::process::exit(1);
  }
}
