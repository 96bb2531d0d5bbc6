//! Error types for the timing harness.

use thiserror::Error;

/// Timing harness error.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TimingError {
    /// Invalid harness configuration.
    #[error("Invalid timing configuration: {0}")]
    InvalidConfig(String),
}
