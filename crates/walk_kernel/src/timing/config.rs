//! Timing harness configuration.

use super::error::TimingError;

/// Default number of timed trials.
pub const DEFAULT_REPEATS: usize = 500;

/// Configuration for a minimum-time measurement.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `repeats` | 500 | Number of timed trials |
/// | `warmup` | 0 | Untimed trials run before measuring |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimingConfig {
    /// Number of timed trials.
    pub repeats: usize,

    /// Number of untimed warmup trials.
    pub warmup: usize,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            repeats: DEFAULT_REPEATS,
            warmup: 0,
        }
    }
}

impl TimingConfig {
    /// Creates a configuration with the given number of timed trials.
    pub fn new(repeats: usize) -> Self {
        Self {
            repeats,
            ..Self::default()
        }
    }

    /// Sets the number of timed trials.
    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    /// Sets the number of warmup trials.
    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.warmup = warmup;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TimingError::InvalidConfig`] if `repeats` is 0, since a
    /// minimum over no trials is undefined.
    pub fn validate(&self) -> Result<(), TimingError> {
        if self.repeats == 0 {
            return Err(TimingError::InvalidConfig(
                "repeats must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
