//! Pseudo-random number generator wrapper for random-walk simulation.
//!
//! This module provides [`WalkRng`], a PRNG wrapper that draws standard
//! normal variates and remembers the seed it was initialised with.

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Random source for random-walk generation.
///
/// Wraps `StdRng` together with the `StandardNormal` sampler (mean 0,
/// standard deviation 1). Every draw advances the same internal state.
///
/// # Examples
///
/// ```rust
/// use walk_kernel::rng::WalkRng;
///
/// let mut rng = WalkRng::from_seed(42);
///
/// let n: f64 = rng.gen_normal();
///
/// let mut buffer = vec![0.0; 100];
/// rng.fill_normal(&mut buffer);
/// ```
#[derive(Debug)]
pub struct WalkRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation.
    seed: u64,
}

impl WalkRng {
    /// Creates a new RNG instance initialised with the given seed.
    ///
    /// The same seed always produces the same sequence of variates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use walk_kernel::rng::WalkRng;
    ///
    /// let mut rng1 = WalkRng::from_seed(12345);
    /// let mut rng2 = WalkRng::from_seed(12345);
    ///
    /// assert_eq!(rng1.gen_normal(), rng2.gen_normal());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a new RNG instance seeded from the operating system's
    /// entropy source.
    ///
    /// The drawn seed is retained and available via [`seed`](Self::seed).
    pub fn from_entropy() -> Self {
        Self::from_seed(OsRng.next_u64())
    }

    /// Creates an RNG from an optional seed, falling back to entropy.
    #[inline]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Returns the seed used for initialisation.
    ///
    /// ```rust
    /// use walk_kernel::rng::WalkRng;
    ///
    /// let rng = WalkRng::from_seed(42);
    /// assert_eq!(rng.seed(), 42);
    /// ```
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single standard normal variate (mean=0, std=1).
    ///
    /// Uses the Ziggurat algorithm via `rand_distr::StandardNormal`.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills the buffer with standard normal variates.
    ///
    /// The buffer must be pre-allocated by the caller. Empty buffers are a
    /// no-op.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}
