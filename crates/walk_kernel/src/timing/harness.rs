//! Trial loop for minimum-time measurement.

use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::trace;

use super::config::TimingConfig;
use super::error::TimingError;
use crate::rng::WalkRng;
use crate::walk::random_walk;

/// Outcome of a minimum-time measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// Fastest observed trial.
    pub min: Duration,

    /// Number of timed trials.
    pub trials: usize,
}

impl Timing {
    /// Returns the minimum as whole nanoseconds, saturating at `u64::MAX`.
    pub fn min_ns(&self) -> u64 {
        u64::try_from(self.min.as_nanos()).unwrap_or(u64::MAX)
    }

    /// Returns the minimum in milliseconds.
    pub fn min_ms(&self) -> f64 {
        self.min.as_secs_f64() * 1000.0
    }
}

/// Times `workload` once per configured trial, reporting each trial to
/// `on_trial` as `(trial_index, elapsed)`.
///
/// Warmup trials run first and are neither timed nor reported.
///
/// # Errors
///
/// Returns [`TimingError::InvalidConfig`] if the configuration is invalid.
pub fn measure_each<O, W, F>(
    config: &TimingConfig,
    mut workload: W,
    mut on_trial: F,
) -> Result<Timing, TimingError>
where
    W: FnMut() -> O,
    F: FnMut(usize, Duration),
{
    config.validate()?;

    for _ in 0..config.warmup {
        black_box(workload());
    }

    let mut min = Duration::MAX;
    for trial in 0..config.repeats {
        let start = Instant::now();
        let output = black_box(workload());
        let elapsed = start.elapsed();
        drop(output);

        trace!(trial, elapsed_ns = elapsed.as_nanos() as u64, "Trial complete");
        on_trial(trial, elapsed);

        if elapsed < min {
            min = elapsed;
        }
    }

    Ok(Timing {
        min,
        trials: config.repeats,
    })
}

/// Times `workload` and returns the fastest trial.
///
/// # Errors
///
/// Returns [`TimingError::InvalidConfig`] if the configuration is invalid.
pub fn measure_min<O, W>(config: &TimingConfig, workload: W) -> Result<Timing, TimingError>
where
    W: FnMut() -> O,
{
    measure_each(config, workload, |_, _| {})
}

/// Measures the minimum time to generate `n` random walks of `steps`
/// increments, drawing every trial from the same `rng` stream.
///
/// # Errors
///
/// Returns [`TimingError::InvalidConfig`] if the configuration is invalid.
pub fn measure_random_walk(
    n: usize,
    steps: usize,
    config: &TimingConfig,
    rng: &mut WalkRng,
) -> Result<Timing, TimingError> {
    measure_min(config, || random_walk(n, steps, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::thread;

    /// Stand-in workload sleeping for a scripted sequence of delays.
    fn scripted_delays(delays_ms: &[u64]) -> impl FnMut() -> usize + '_ {
        let mut call = 0;
        move || {
            let delay = delays_ms[call % delays_ms.len()];
            call += 1;
            thread::sleep(Duration::from_millis(delay));
            call
        }
    }

    #[test]
    fn test_min_bounded_by_every_trial() {
        let config = TimingConfig::new(6);
        let mut observed = Vec::new();

        let timing = measure_each(&config, scripted_delays(&[6, 2, 4]), |trial, elapsed| {
            observed.push((trial, elapsed))
        })
        .unwrap();

        assert_eq!(timing.trials, 6);
        assert_eq!(observed.len(), 6);
        for (i, &(trial, elapsed)) in observed.iter().enumerate() {
            assert_eq!(trial, i);
            assert!(timing.min <= elapsed);
        }
        assert!(observed.iter().any(|&(_, elapsed)| elapsed == timing.min));
        assert!(timing.min >= Duration::from_millis(2));
    }

    #[test]
    fn test_zero_repeats_is_error() {
        let calls = Cell::new(0);
        let result = measure_min(&TimingConfig::new(0), || calls.set(calls.get() + 1));

        assert!(matches!(result, Err(TimingError::InvalidConfig(_))));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_warmup_not_reported() {
        let calls = Cell::new(0);
        let mut reported = 0;
        let config = TimingConfig::new(4).with_warmup(3);

        let timing = measure_each(&config, || calls.set(calls.get() + 1), |_, _| reported += 1)
            .unwrap();

        assert_eq!(calls.get(), 7);
        assert_eq!(reported, 4);
        assert_eq!(timing.trials, 4);
    }

    struct SlowDrop;

    impl Drop for SlowDrop {
        fn drop(&mut self) {
            thread::sleep(Duration::from_millis(50));
        }
    }

    /// Releasing the workload output happens after the clock is read.
    #[test]
    fn test_output_drop_not_timed() {
        let timing = measure_min(&TimingConfig::new(3), || SlowDrop).unwrap();
        assert!(timing.min < Duration::from_millis(50));
    }

    #[test]
    fn test_min_ns_and_ms() {
        let timing = Timing {
            min: Duration::from_micros(1500),
            trials: 1,
        };
        assert_eq!(timing.min_ns(), 1_500_000);
        assert!((timing.min_ms() - 1.5).abs() < 1e-12);

        let huge = Timing {
            min: Duration::MAX,
            trials: 1,
        };
        assert_eq!(huge.min_ns(), u64::MAX);
    }

    #[test]
    fn test_measure_random_walk_advances_rng() {
        let mut rng = WalkRng::from_seed(8);
        let timing = measure_random_walk(16, 10, &TimingConfig::new(5), &mut rng).unwrap();
        assert_eq!(timing.trials, 5);

        // 5 trials x 16 samples x 10 steps draws consumed
        let mut reference = WalkRng::from_seed(8);
        let mut skip = vec![0.0; 5 * 16 * 10];
        reference.fill_normal(&mut skip);
        assert_eq!(rng.gen_normal(), reference.gen_normal());
    }
}
