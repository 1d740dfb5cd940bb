//! JSON Schema validation for audit-rs
//!
//! The audit pipeline is schema-first: requests are validated against
//! `audit_input_schema.json` before evaluation and reports against
//! `audit_output_schema.json` before they leave the engine. This crate loads
//! and compiles those schemas and turns violations into readable errors.

pub mod document;
pub mod error;
pub mod store;

pub use document::SchemaDocument;
pub use error::{Result, SchemaError};
pub use store::{INPUT_SCHEMA_FILE, OUTPUT_SCHEMA_FILE, SchemaSet};
