//! Top-level error types for the deploy command.

use thiserror::Error;

/// Result type alias for command execution
pub type Result<T> = std::result::Result<T, DeployError>;

/// Main error type for a deploy run
#[derive(Error, Debug)]
pub enum DeployError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Packaging errors
    #[error(transparent)]
    Bundler(#[from] crate::bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}
