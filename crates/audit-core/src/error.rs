//! Error types for audit-core

use thiserror::Error;

/// Result type alias for audit-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for audit operations
#[derive(Error, Debug)]
pub enum Error {
    /// Generic error message
    #[error("{0}")]
    Generic(String),

    /// The audit request was malformed
    #[error("Invalid audit input: {0}")]
    InvalidInput(String),

    /// Evaluation could not produce a report
    #[error("Evaluation failed: {0}")]
    EvaluationFailed(String),
}
