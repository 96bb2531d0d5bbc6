//! Sample-size sweep.
//!
//! Drives the timing harness across a list of sample counts, holding the
//! walk length and repeat count fixed, and writes one CSV row per count:
//!
//! ```text
//! n,T,time_ns
//! 8,100,<min ns>
//! 16,100,<min ns>
//! ...
//! ```
//!
//! Rows appear in the order of [`SweepConfig::sample_sizes`].

mod config;
mod driver;
mod record;

pub use config::{doubling_sizes, ConfigError, SweepConfig, SweepConfigBuilder};
pub use driver::{run_sweep, run_sweep_to_path, SweepOutcome};
pub use record::SweepRecord;
