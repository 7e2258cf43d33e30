//! Error types and exit codes for runstate

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for state-cache operations
#[derive(Error, Debug)]
pub enum StateCacheError {
    #[error("Invalid namespace: {namespace:?}")]
    InvalidNamespace { namespace: String },

    #[error("Invalid document: {message}")]
    InvalidDocument { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StateCacheError {
    /// Convert error to appropriate exit code:
    /// - 0: Success
    /// - 1: IO error
    /// - 2: Invalid namespace
    /// - 3: Invalid document
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Io(_) => ExitCode::from(1),
            Self::InvalidNamespace { .. } => ExitCode::from(2),
            Self::InvalidDocument { .. } => ExitCode::from(3),
        }
    }
}

/// Result type alias for state-cache operations
pub type Result<T> = std::result::Result<T, StateCacheError>;
