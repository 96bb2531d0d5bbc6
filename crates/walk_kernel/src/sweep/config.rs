//! Sweep configuration.
//!
//! Loaded from an optional TOML file, then overridden by `WALKBENCH_*`
//! environment variables. Every key is optional; the defaults reproduce the
//! reference sweep (sizes 8 to 16384, `T = 100`, 500 repeats, output to
//! `cpp_results.csv`, entropy seeding).
//!
//! ```toml
//! sample_sizes = [8, 16, 32, 64]
//! steps = 100
//! repeats = 500
//! warmup = 0
//! output = "cpp_results.csv"
//! seed = 42
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::timing::TimingConfig;

/// Environment variable overriding the sample-size list (comma separated).
pub const ENV_SAMPLE_SIZES: &str = "WALKBENCH_SAMPLE_SIZES";
/// Environment variable overriding the walk length.
pub const ENV_STEPS: &str = "WALKBENCH_STEPS";
/// Environment variable overriding the repeat count.
pub const ENV_REPEATS: &str = "WALKBENCH_REPEATS";
/// Environment variable overriding the output path.
pub const ENV_OUTPUT: &str = "WALKBENCH_OUTPUT";
/// Environment variable fixing the RNG seed.
pub const ENV_SEED: &str = "WALKBENCH_SEED";

/// Returns `count` sizes starting at `start`, each double the previous.
///
/// Stops early if doubling would overflow `usize`.
///
/// ```rust
/// use walk_kernel::sweep::doubling_sizes;
///
/// assert_eq!(doubling_sizes(8, 4), vec![8, 16, 32, 64]);
/// ```
pub fn doubling_sizes(start: usize, count: usize) -> Vec<usize> {
    std::iter::successors(Some(start), |&n| n.checked_mul(2))
        .take(count)
        .collect()
}

fn default_sample_sizes() -> Vec<usize> {
    doubling_sizes(8, 12)
}

fn default_steps() -> usize {
    100
}

fn default_repeats() -> usize {
    500
}

fn default_output() -> PathBuf {
    PathBuf::from("cpp_results.csv")
}

/// Sweep configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SweepConfig {
    /// Sample counts to measure, in output order
    #[serde(default = "default_sample_sizes")]
    pub sample_sizes: Vec<usize>,

    /// Walk length `T`
    #[serde(default = "default_steps")]
    pub steps: usize,

    /// Timed trials per sample count
    #[serde(default = "default_repeats")]
    pub repeats: usize,

    /// Untimed trials per sample count
    #[serde(default)]
    pub warmup: usize,

    /// CSV output path
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// RNG seed; `None` draws one from the OS
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sample_sizes: default_sample_sizes(),
            steps: default_steps(),
            repeats: default_repeats(),
            warmup: 0,
            output: default_output(),
            seed: None,
        }
    }
}

impl SweepConfig {
    /// Creates a new configuration builder starting from the defaults.
    pub fn builder() -> SweepConfigBuilder {
        SweepConfigBuilder::default()
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or return the defaults if the file
    /// does not exist. A file that exists but fails to parse is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `WALKBENCH_*` environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Values that fail to parse are logged and ignored.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_SAMPLE_SIZES) {
            match parse_size_list(&raw) {
                Some(sizes) => self.sample_sizes = sizes,
                None => warn!(key = ENV_SAMPLE_SIZES, value = %raw, "Ignoring unparseable override"),
            }
        }

        if let Some(raw) = lookup(ENV_STEPS) {
            match raw.trim().parse() {
                Ok(steps) => self.steps = steps,
                Err(_) => warn!(key = ENV_STEPS, value = %raw, "Ignoring unparseable override"),
            }
        }

        if let Some(raw) = lookup(ENV_REPEATS) {
            match raw.trim().parse() {
                Ok(repeats) => self.repeats = repeats,
                Err(_) => warn!(key = ENV_REPEATS, value = %raw, "Ignoring unparseable override"),
            }
        }

        if let Some(raw) = lookup(ENV_OUTPUT) {
            self.output = PathBuf::from(raw);
        }

        if let Some(raw) = lookup(ENV_SEED) {
            match raw.trim().parse() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => warn!(key = ENV_SEED, value = %raw, "Ignoring unparseable override"),
            }
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.repeats == 0 {
            errors.push("repeats must be greater than 0".to_string());
        }

        if self.output.as_os_str().is_empty() {
            errors.push("output cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Harness configuration for each swept size
    pub fn timing_config(&self) -> TimingConfig {
        TimingConfig::new(self.repeats).with_warmup(self.warmup)
    }
}

/// Parses a comma separated list of sample counts.
pub(crate) fn parse_size_list(raw: &str) -> Option<Vec<usize>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().ok())
        .collect()
}

/// Builder for [`SweepConfig`].
///
/// ```rust
/// use walk_kernel::sweep::SweepConfig;
///
/// let config = SweepConfig::builder()
///     .sample_sizes(vec![8, 16, 32])
///     .repeats(10)
///     .seed(7)
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.steps, 100);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SweepConfigBuilder {
    config: SweepConfig,
}

impl SweepConfigBuilder {
    /// Sets the sample counts to sweep.
    pub fn sample_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.config.sample_sizes = sizes;
        self
    }

    /// Sets the walk length.
    pub fn steps(mut self, steps: usize) -> Self {
        self.config.steps = steps;
        self
    }

    /// Sets the number of timed trials.
    pub fn repeats(mut self, repeats: usize) -> Self {
        self.config.repeats = repeats;
        self
    }

    /// Sets the number of warmup trials.
    pub fn warmup(mut self, warmup: usize) -> Self {
        self.config.warmup = warmup;
        self
    }

    /// Sets the CSV output path.
    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.config.output = output.into();
        self
    }

    /// Fixes the RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Builds and validates the configuration.
    pub fn build(self) -> Result<SweepConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = SweepConfig::default();
        assert_eq!(
            config.sample_sizes,
            vec![8, 16, 32, 64, 128, 256, 512, 1024, 2048, 4096, 8192, 16384]
        );
        assert_eq!(config.steps, 100);
        assert_eq!(config.repeats, 500);
        assert_eq!(config.warmup, 0);
        assert_eq!(config.output, PathBuf::from("cpp_results.csv"));
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_doubling_sizes() {
        assert_eq!(doubling_sizes(1, 5), vec![1, 2, 4, 8, 16]);
        assert!(doubling_sizes(8, 0).is_empty());
        assert_eq!(doubling_sizes(usize::MAX / 2 + 1, 3).len(), 1);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = SweepConfig::from_toml_str("steps = 50\nseed = 9\n").unwrap();
        assert_eq!(config.steps, 50);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.repeats, 500);
        assert_eq!(config.sample_sizes.len(), 12);
    }

    #[test]
    fn test_parse_full_toml() {
        let config = SweepConfig::from_toml_str(
            r#"
            sample_sizes = [4, 8]
            steps = 10
            repeats = 3
            warmup = 1
            output = "out.csv"
            "#,
        )
        .unwrap();
        assert_eq!(config.sample_sizes, vec![4, 8]);
        assert_eq!(config.timing_config(), TimingConfig::new(3).with_warmup(1));
        assert_eq!(config.output, PathBuf::from("out.csv"));
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        let result = SweepConfig::from_toml_str("walk_length = 10\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let path = Path::new("definitely/not/here/walkbench.toml");
        assert!(matches!(SweepConfig::load(path), Err(ConfigError::Io(_))));
        assert_eq!(SweepConfig::load_or_default(path).unwrap(), SweepConfig::default());
    }

    #[test]
    fn test_overrides_applied() {
        let config = SweepConfig::default().with_overrides_from(lookup_from(&[
            (ENV_SAMPLE_SIZES, "2, 4,8"),
            (ENV_STEPS, "7"),
            (ENV_REPEATS, "3"),
            (ENV_OUTPUT, "bench.csv"),
            (ENV_SEED, "123"),
        ]));

        assert_eq!(config.sample_sizes, vec![2, 4, 8]);
        assert_eq!(config.steps, 7);
        assert_eq!(config.repeats, 3);
        assert_eq!(config.output, PathBuf::from("bench.csv"));
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_bad_overrides_ignored() {
        let config = SweepConfig::default().with_overrides_from(lookup_from(&[
            (ENV_SAMPLE_SIZES, "8,sixteen"),
            (ENV_STEPS, "-1"),
            (ENV_SEED, "abc"),
        ]));

        assert_eq!(config, SweepConfig::default());
    }

    #[test]
    fn test_validate_collects_errors() {
        let mut config = SweepConfig::default();
        config.repeats = 0;
        config.output = PathBuf::new();

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.iter().any(|e| e.contains("repeats")));
                assert!(errors.iter().any(|e| e.contains("output")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_builder() {
        let config = SweepConfig::builder()
            .sample_sizes(vec![1, 2])
            .steps(5)
            .repeats(2)
            .warmup(1)
            .output("x.csv")
            .seed(4)
            .build()
            .unwrap();

        assert_eq!(config.sample_sizes, vec![1, 2]);
        assert_eq!(config.steps, 5);
        assert_eq!(config.seed, Some(4));

        let result = SweepConfig::builder().repeats(0).build();
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
