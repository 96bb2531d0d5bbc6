//! # Random Number Generation
//!
//! Random source for the random-walk generator: a single PRNG paired with a
//! standard normal sampler.
//!
//! ## Design Rationale
//!
//! - **One stream**: a [`WalkRng`] is passed by `&mut` everywhere, so draws
//!   are never replayed between samples, repeats or swept sizes
//! - **Replayable**: entropy-seeded generators still remember the seed they
//!   were built from, so a run can be regenerated from its log
//! - **Zero allocation** batch fills via `&mut [f64]` slices
//!
//! ## Usage Example
//!
//! ```rust
//! use walk_kernel::rng::WalkRng;
//!
//! // Seeded from the operating system
//! let mut rng = WalkRng::from_entropy();
//! let _ = rng.gen_normal();
//!
//! // Reproducible
//! let mut a = WalkRng::from_seed(7);
//! let mut b = WalkRng::from_seed(a.seed());
//! assert_eq!(a.gen_normal(), b.gen_normal());
//! ```

mod prng;

pub use prng::WalkRng;
