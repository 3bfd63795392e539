//! Error types for the harness.

use crate::controller::SessionState;
use thiserror::Error;

/// Errors produced by harness operations.
///
/// `Load` is fatal to the session: without a manifest and prelude no test can
/// be filtered or assembled. `ContentNotFound` covers a single missing test
/// body and is recorded by the run controller as that test's failure while
/// the batch continues.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A manifest or harness resource could not be read.
    #[error("failed to load {resource}: {source}")]
    Load {
        /// Name of the unreadable resource.
        resource: String,
        source: std::io::Error,
    },

    /// An individual test body is missing from the suite store.
    #[error("test content not found: {identifier}: {source}")]
    ContentNotFound {
        /// Identifier of the missing test.
        identifier: String,
        source: std::io::Error,
    },

    /// An operation was invoked in a state that does not permit it.
    #[error("cannot {operation} while in {state:?} state")]
    InvalidState {
        /// The operation that was refused.
        operation: &'static str,
        /// Controller state at the time of the call.
        state: SessionState,
    },
}

impl HarnessError {
    /// Whether this error ends the session rather than a single test.
    pub fn is_fatal(&self) -> bool {
        matches!(self, HarnessError::Load { .. })
    }
}

/// Result type for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;
