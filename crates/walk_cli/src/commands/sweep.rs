//! Sweep command implementation
//!
//! Times the random-walk generator across sample sizes and writes the CSV
//! report via `walk_kernel::sweep`.

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;
use walk_kernel::sweep::{run_sweep_to_path, SweepConfig};

use crate::Result;

/// Flags overriding the sweep configuration
#[derive(Debug, Default, Args)]
pub struct SweepArgs {
    /// Comma separated sample sizes, in output order
    #[arg(long, value_delimiter = ',')]
    pub sizes: Option<Vec<usize>>,

    /// Walk length T
    #[arg(short = 't', long)]
    pub steps: Option<usize>,

    /// Timed trials per sample size
    #[arg(short, long)]
    pub repeats: Option<usize>,

    /// Untimed warmup trials per sample size
    #[arg(long)]
    pub warmup: Option<usize>,

    /// CSV output path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// RNG seed (drawn from the OS when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl SweepArgs {
    /// Applies the flags that were given on top of `config`.
    pub fn apply(self, mut config: SweepConfig) -> SweepConfig {
        if let Some(sizes) = self.sizes {
            config.sample_sizes = sizes;
        }
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if let Some(repeats) = self.repeats {
            config.repeats = repeats;
        }
        if let Some(warmup) = self.warmup {
            config.warmup = warmup;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }
}

/// Resolves the effective configuration: file, then environment, then flags.
pub fn resolve_config(config_path: &str, args: SweepArgs) -> Result<SweepConfig> {
    let config = SweepConfig::load_or_default(Path::new(config_path))?.with_env_override();
    let config = args.apply(config);
    config.validate()?;
    Ok(config)
}

/// Run the sweep command
pub fn run(config_path: &str, args: SweepArgs) -> Result<()> {
    let config = resolve_config(config_path, args)?;

    info!("Running sweep...");
    info!("  Sample sizes: {:?}", config.sample_sizes);
    info!("  Walk length: {}", config.steps);
    info!("  Repeats: {}", config.repeats);
    info!("  Output: {}", config.output.display());

    let outcome = run_sweep_to_path(&config)?;

    info!(
        "Sweep complete: {} rows written (seed {})",
        outcome.records.len(),
        outcome.seed
    );
    Ok(())
}
