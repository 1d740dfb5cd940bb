//! Schema pair used by the audit pipeline

use crate::document::SchemaDocument;
use crate::error::{Result, SchemaError};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// File name of the audit input schema
pub const INPUT_SCHEMA_FILE: &str = "audit_input_schema.json";

/// File name of the audit output schema
pub const OUTPUT_SCHEMA_FILE: &str = "audit_output_schema.json";

const BUNDLED_INPUT_SCHEMA: &str = include_str!("../../../docs/audit_input_schema.json");
const BUNDLED_OUTPUT_SCHEMA: &str = include_str!("../../../docs/audit_output_schema.json");

/// The input and output schemas of the audit pipeline
#[derive(Debug)]
pub struct SchemaSet {
    input: SchemaDocument,
    output: SchemaDocument,
}

impl SchemaSet {
    /// Load both schemas from a directory
    ///
    /// Missing files and malformed JSON are reported per path, matching the
    /// CLI's "Error loading schema ..." behavior.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let input = load_schema_json(&dir.join(INPUT_SCHEMA_FILE))?;
        let output = load_schema_json(&dir.join(OUTPUT_SCHEMA_FILE))?;

        debug!(dir = %dir.display(), "Loaded audit schemas");

        Ok(Self {
            input: SchemaDocument::compile("input", &input)?,
            output: SchemaDocument::compile("output", &output)?,
        })
    }

    /// Compile the schemas bundled with the repository's `docs/` directory
    ///
    /// Lets the CLI run without a schema directory on disk.
    pub fn bundled() -> Result<Self> {
        let input = parse_schema_json("bundled:audit_input_schema.json", BUNDLED_INPUT_SCHEMA)?;
        let output = parse_schema_json("bundled:audit_output_schema.json", BUNDLED_OUTPUT_SCHEMA)?;

        Ok(Self {
            input: SchemaDocument::compile("input", &input)?,
            output: SchemaDocument::compile("output", &output)?,
        })
    }

    /// Schema for audit requests
    pub fn input(&self) -> &SchemaDocument {
        &self.input
    }

    /// Schema for audit reports
    pub fn output(&self) -> &SchemaDocument {
        &self.output
    }
}

fn load_schema_json(path: &Path) -> Result<Value> {
    let raw = std::fs::read_to_string(path).map_err(|e| SchemaError::LoadFailed {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;
    parse_schema_json(&path.display().to_string(), &raw)
}

fn parse_schema_json(path: &str, raw: &str) -> Result<Value> {
    serde_json::from_str(raw).map_err(|e| SchemaError::ParseFailed {
        path: path.to_string(),
        detail: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_schemas(dir: &Path) {
        let input = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {"content": {"type": "object"}},
            "required": ["content"]
        });
        let output = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {"audit_id": {"type": "string"}},
            "required": ["audit_id"]
        });
        std::fs::write(
            dir.join(INPUT_SCHEMA_FILE),
            serde_json::to_string_pretty(&input).unwrap(),
        )
        .unwrap();
        std::fs::write(
            dir.join(OUTPUT_SCHEMA_FILE),
            serde_json::to_string_pretty(&output).unwrap(),
        )
        .unwrap();
    }

    #[test]
    fn test_load_success() {
        let dir = tempfile::tempdir().unwrap();
        write_schemas(dir.path());

        let schemas = SchemaSet::load(dir.path()).unwrap();
        assert!(schemas.input().is_valid(&json!({"content": {}})));
        assert!(!schemas.input().is_valid(&json!({})));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SchemaSet::load(dir.path()).unwrap_err();
        assert!(matches!(err, SchemaError::LoadFailed { .. }));
        assert!(err.to_string().contains(INPUT_SCHEMA_FILE));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(INPUT_SCHEMA_FILE), "{invalid json").unwrap();
        std::fs::write(dir.path().join(OUTPUT_SCHEMA_FILE), "{}").unwrap();

        let err = SchemaSet::load(dir.path()).unwrap_err();
        assert!(matches!(err, SchemaError::ParseFailed { .. }));
    }

    #[test]
    fn test_bundled_schemas_compile() {
        let schemas = SchemaSet::bundled().unwrap();
        assert_eq!(schemas.input().name(), "input");
        assert_eq!(schemas.output().name(), "output");
    }
}
