//! Error types for the random-walk kernel.

use thiserror::Error;

use crate::sweep::ConfigError;
use crate::timing::TimingError;

/// Kernel error type
#[derive(Debug, Error)]
pub enum WalkError {
    /// Sweep configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Timing harness error
    #[error("Timing error: {0}")]
    Timing(#[from] TimingError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialisation error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for kernel operations
pub type Result<T> = std::result::Result<T, WalkError>;
