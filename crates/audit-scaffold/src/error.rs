//! Error types for scaffold operations

use thiserror::Error;

/// Result type for scaffold operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Errors that can occur during scaffold generation
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Template not found for the specified language
    #[error("Template '{name}' not found for language '{language}'")]
    TemplateNotFound { name: String, language: String },

    /// Template parsing failed
    #[error("Failed to parse template '{name}' for language '{language}': {detail}")]
    TemplateParseFailed {
        name: String,
        language: String,
        detail: String,
    },

    /// Template rendering failed
    #[error("Failed to render template '{name}': {detail}")]
    RenderError { name: String, detail: String },

    /// No templates provided when building
    #[error("No templates provided for '{0}'")]
    NoTemplatesProvided(String),

    /// No language available for the template
    #[error("No language available for template '{0}'")]
    NoLanguageAvailable(String),

    /// Workflow serialization error
    #[error("Workflow serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
