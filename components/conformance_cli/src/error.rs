//! Error types for the CLI

use conformance_harness::HarnessError;
use std::fmt;

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Harness or session error
    Harness(HarnessError),

    /// File I/O error
    Io(std::io::Error),

    /// Report serialization error
    Report(serde_json::Error),

    /// Bad command-line input (unknown category name, etc.)
    Usage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Harness(e) => write!(f, "Harness error: {}", e),
            CliError::Io(e) => write!(f, "File error: {}", e),
            CliError::Report(e) => write!(f, "Report error: {}", e),
            CliError::Usage(s) => write!(f, "Usage error: {}", s),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Harness(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::Report(e) => Some(e),
            CliError::Usage(_) => None,
        }
    }
}

impl From<HarnessError> for CliError {
    fn from(err: HarnessError) -> Self {
        CliError::Harness(err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Report(err)
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
