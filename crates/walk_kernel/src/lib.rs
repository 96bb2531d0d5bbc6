//! # Random-Walk Timing Kernel
//!
//! `walk_kernel` measures how long it takes to generate Monte Carlo random
//! walks as the number of samples grows.
//!
//! ## Components
//!
//! - [`rng`]: seeded PRNG wrapper producing standard normal variates
//! - [`walk`]: the random-walk generator (sum of `T` normal draws per sample)
//! - [`timing`]: minimum-time harness around an arbitrary workload
//! - [`sweep`]: configuration and CSV driver sweeping the harness over sizes
//!
//! Execution is single-threaded. The only shared mutable state is the
//! [`rng::WalkRng`], passed by exclusive reference so its stream advances
//! monotonically across every draw.
//!
//! ## Usage Example
//!
//! ```rust
//! use walk_kernel::rng::WalkRng;
//! use walk_kernel::timing::{measure_random_walk, TimingConfig};
//!
//! let mut rng = WalkRng::from_seed(42);
//! let config = TimingConfig::new(5);
//!
//! let timing = measure_random_walk(64, 100, &config, &mut rng).unwrap();
//! assert_eq!(timing.trials, 5);
//! ```

pub mod error;
pub mod rng;
pub mod sweep;
pub mod timing;
pub mod walk;

pub use error::{Result, WalkError};
