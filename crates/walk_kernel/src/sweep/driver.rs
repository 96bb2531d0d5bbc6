//! Sweep execution and CSV output.

use std::fs::File;
use std::io;

use tracing::info;

use super::config::SweepConfig;
use super::record::SweepRecord;
use crate::error::Result;
use crate::rng::WalkRng;
use crate::timing::measure_random_walk;

/// Result of a sweep written to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SweepOutcome {
    /// Seed the RNG was initialised with.
    pub seed: u64,

    /// Rows written, in output order.
    pub records: Vec<SweepRecord>,
}

/// Runs the sweep described by `config`, writing CSV to `sink`.
///
/// The header row is always written, followed by one row per entry of
/// `config.sample_sizes`. All sizes draw from the same `rng` stream. The
/// sink is flushed before returning.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the sink fails.
pub fn run_sweep<W: io::Write>(
    config: &SweepConfig,
    rng: &mut WalkRng,
    sink: W,
) -> Result<Vec<SweepRecord>> {
    config.validate()?;
    let timing_config = config.timing_config();

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink);
    writer.write_record(SweepRecord::HEADER)?;

    let mut records = Vec::with_capacity(config.sample_sizes.len());
    for &n in &config.sample_sizes {
        let timing = measure_random_walk(n, config.steps, &timing_config, rng)?;
        let record = SweepRecord {
            n,
            steps: config.steps,
            time_ns: timing.min_ns(),
        };
        writer.serialize(record)?;

        info!(
            n,
            steps = config.steps,
            repeats = timing.trials,
            time_ns = record.time_ns,
            "Sample size measured"
        );
        records.push(record);
    }

    writer.flush()?;
    Ok(records)
}

/// Runs the sweep and writes it to `config.output`.
///
/// The output file is created, or truncated if it already exists, and is
/// closed before returning.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the file cannot be
/// created or written.
pub fn run_sweep_to_path(config: &SweepConfig) -> Result<SweepOutcome> {
    config.validate()?;

    let mut rng = WalkRng::from_optional_seed(config.seed);
    info!(
        seed = rng.seed(),
        sizes = config.sample_sizes.len(),
        steps = config.steps,
        repeats = config.repeats,
        output = %config.output.display(),
        "Starting sweep"
    );

    let file = File::create(&config.output)?;
    let records = run_sweep(config, &mut rng, file)?;

    info!(
        rows = records.len(),
        output = %config.output.display(),
        "Sweep written"
    );

    Ok(SweepOutcome {
        seed: rng.seed(),
        records,
    })
}
