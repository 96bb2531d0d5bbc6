//! Measure command implementation
//!
//! Times a single `(n, T)` point and prints the fastest trial.

use clap::Args;
use tracing::info;
use walk_kernel::rng::WalkRng;
use walk_kernel::timing::{measure_random_walk, Timing, TimingConfig};

use crate::{CliError, Result};

/// Parameters for a single-point measurement
#[derive(Debug, Args)]
pub struct MeasureArgs {
    /// Number of random walks per trial
    #[arg(short = 'n', long, default_value = "1024")]
    pub samples: usize,

    /// Walk length T
    #[arg(short = 't', long, default_value = "100")]
    pub steps: usize,

    /// Timed trials
    #[arg(short, long, default_value = "10")]
    pub repeats: usize,

    /// Untimed warmup trials
    #[arg(long, default_value = "0")]
    pub warmup: usize,

    /// RNG seed (drawn from the OS when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Performs the measurement described by `args`.
pub fn measure(args: &MeasureArgs) -> Result<Timing> {
    if args.repeats == 0 {
        return Err(CliError::InvalidArgument(
            "--repeats must be greater than 0".to_string(),
        ));
    }

    let config = TimingConfig::new(args.repeats).with_warmup(args.warmup);
    let mut rng = WalkRng::from_optional_seed(args.seed);

    info!("Measuring random walk...");
    info!("  Samples: {}", args.samples);
    info!("  Walk length: {}", args.steps);
    info!("  Repeats: {}", args.repeats);
    info!("  Seed: {}", rng.seed());

    Ok(measure_random_walk(args.samples, args.steps, &config, &mut rng)?)
}

/// Run the measure command
pub fn run(args: MeasureArgs) -> Result<()> {
    let timing = measure(&args)?;

    println!(
        "n={} T={}: the min time over {} repeats was {:.6}ms ({} ns)",
        args.samples,
        args.steps,
        timing.trials,
        timing.min_ms(),
        timing.min_ns()
    );
    Ok(())
}
