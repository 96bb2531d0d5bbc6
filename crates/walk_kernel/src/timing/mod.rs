//! Minimum-time measurement harness.
//!
//! Runs a workload a fixed number of times and keeps the fastest trial,
//! which approximates best-case cost by filtering out scheduling noise.
//!
//! # Trial Discipline
//!
//! Each trial times one workload call. The workload's output is passed
//! through [`std::hint::black_box`] so the optimiser cannot elide it, the
//! clock is read, and only then is the output dropped. Deallocation of the
//! result buffer is therefore not part of the measured time.
//!
//! ```rust
//! use walk_kernel::timing::{measure_min, TimingConfig};
//!
//! let config = TimingConfig::new(10);
//! let timing = measure_min(&config, || vec![0.0_f64; 1024]).unwrap();
//!
//! assert_eq!(timing.trials, 10);
//! ```

mod config;
mod error;
mod harness;

pub use config::TimingConfig;
pub use error::TimingError;
pub use harness::{measure_each, measure_min, measure_random_walk, Timing};
