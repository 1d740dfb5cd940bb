//! Error types for the evaluation pipeline

use thiserror::Error;

/// Evaluation pipeline errors
#[derive(Debug, Error)]
pub enum EngineError {
    /// Schema loading or validation failed
    #[error(transparent)]
    Schema(#[from] audit_schema::SchemaError),

    /// Request is structurally valid but semantically unusable
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rate limit exceeded for an upstream provider
    #[error("Rate limit exceeded for {provider}")]
    RateLimitExceeded { provider: String },

    /// A link could not be checked
    #[error("Link check failed for {url}: {reason}")]
    LinkCheckFailed { url: String, reason: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The evaluator failed to produce a report
    #[error("Evaluation error: {0}")]
    Evaluation(String),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Convert EngineError to audit_core::Error
impl From<EngineError> for audit_core::Error {
    fn from(err: EngineError) -> Self {
        audit_core::Error::EvaluationFailed(err.to_string())
    }
}

/// Convert audit_core::Error to EngineError
impl From<audit_core::Error> for EngineError {
    fn from(err: audit_core::Error) -> Self {
        EngineError::Evaluation(err.to_string())
    }
}
