//! Error types for schema operations

use thiserror::Error;

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors that can occur while loading or applying schemas
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Schema file could not be read
    #[error("Error loading schema {path}: {detail}")]
    LoadFailed { path: String, detail: String },

    /// Schema file is not valid JSON
    #[error("Error parsing schema {path}: {detail}")]
    ParseFailed { path: String, detail: String },

    /// Schema JSON is not a valid JSON Schema
    #[error("Failed to compile schema '{name}': {detail}")]
    CompileFailed { name: String, detail: String },

    /// A document violated the schema
    #[error("{schema} validation error: {}", violations.join("; "))]
    ValidationFailed {
        schema: String,
        violations: Vec<String>,
    },
}
