//! Compiled schema wrapper

use crate::error::{Result, SchemaError};
use jsonschema::Validator;
use serde_json::Value;

/// A named, compiled JSON Schema
pub struct SchemaDocument {
    name: String,
    validator: Validator,
}

impl SchemaDocument {
    /// Compile a schema from its JSON representation
    pub fn compile(name: impl Into<String>, schema: &Value) -> Result<Self> {
        let name = name.into();
        let validator =
            jsonschema::validator_for(schema).map_err(|e| SchemaError::CompileFailed {
                name: name.clone(),
                detail: e.to_string(),
            })?;

        Ok(Self { name, validator })
    }

    /// Get the schema name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cheap validity check without error details
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validator.is_valid(instance)
    }

    /// Validate a document, collecting every violation
    pub fn validate(&self, instance: &Value) -> Result<()> {
        let violations: Vec<String> = self
            .validator
            .iter_errors(instance)
            .map(|error| {
                let path = error.instance_path.to_string();
                if path.is_empty() {
                    error.to_string()
                } else {
                    format!("{path}: {error}")
                }
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed {
                schema: self.name.clone(),
                violations,
            })
        }
    }
}

impl std::fmt::Debug for SchemaDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaDocument")
            .field("name", &self.name)
            .finish()
    }
}
