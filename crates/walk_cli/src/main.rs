//! walkbench CLI - Random-Walk Timing Sweeps
//!
//! Operational entry point for the `walk_kernel` library.
//!
//! # Commands
//!
//! - `walkbench sweep` - Time the generator across sample sizes and write CSV
//!   (the default when no command is given)
//! - `walkbench measure` - Time a single `(n, T)` point and print the minimum
//!
//! # Configuration precedence
//!
//! Command-line flags override `WALKBENCH_*` environment variables, which
//! override the TOML file named by `--config`, which overrides the built-in
//! defaults.

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;

pub use error::{CliError, Result};

use commands::{measure::MeasureArgs, sweep::SweepArgs};

/// Random-walk timing benchmark
#[derive(Debug, Parser)]
#[command(name = "walkbench")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "walkbench.toml")]
    config: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Sweep the harness across sample sizes and write a CSV report
    Sweep(SweepArgs),

    /// Measure the minimum time for a single sample size
    Measure(MeasureArgs),
}

fn init_tracing(verbose: bool) {
    let default_directives = if verbose {
        "walk_kernel=debug,walkbench=debug"
    } else {
        "walk_kernel=info,walkbench=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(config = %cli.config, "Configuration file");

    match cli.command.unwrap_or_else(|| Commands::Sweep(SweepArgs::default())) {
        Commands::Sweep(args) => commands::sweep::run(&cli.config, args),
        Commands::Measure(args) => commands::measure::run(args),
    }
}
