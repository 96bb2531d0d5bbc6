//! Random-walk generator.
//!
//! Each sample is the terminal displacement of a walk of `steps` independent
//! standard normal increments. Samples are generated sequentially from a
//! single [`WalkRng`] stream: sample `i` consumes draws
//! `i * steps .. (i + 1) * steps`.

use crate::rng::WalkRng;

/// Generates `n` random-walk endpoints of `steps` normal increments each.
///
/// Returns a freshly allocated buffer owned by the caller. `n = 0` yields an
/// empty vector and `steps = 0` yields `n` zeros.
///
/// # Examples
///
/// ```rust
/// use walk_kernel::rng::WalkRng;
/// use walk_kernel::walk::random_walk;
///
/// let mut rng = WalkRng::from_seed(42);
/// let endpoints = random_walk(1024, 100, &mut rng);
/// assert_eq!(endpoints.len(), 1024);
/// ```
pub fn random_walk(n: usize, steps: usize, rng: &mut WalkRng) -> Vec<f64> {
    let mut endpoints = vec![0.0; n];
    random_walk_into(&mut endpoints, steps, rng);
    endpoints
}

/// Writes one random-walk endpoint into each slot of `out`.
///
/// Same stream semantics as [`random_walk`], without allocating.
#[inline]
pub fn random_walk_into(out: &mut [f64], steps: usize, rng: &mut WalkRng) {
    for slot in out.iter_mut() {
        let mut x_t = 0.0;
        for _ in 0..steps {
            x_t += rng.gen_normal();
        }
        *slot = x_t;
    }
}
