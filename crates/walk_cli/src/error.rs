//! CLI error types.

use thiserror::Error;
use walk_kernel::sweep::ConfigError;
use walk_kernel::timing::TimingError;
use walk_kernel::WalkError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Kernel error during a sweep
    #[error(transparent)]
    Kernel(#[from] WalkError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Timing harness error
    #[error("Timing error: {0}")]
    Timing(#[from] TimingError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
