//! Execution context for evaluation runs
//!
//! The `AuditContext` struct provides a flexible key-value store for passing
//! runtime configuration and state to evaluators during a run.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Well-known context keys for common configuration
pub mod keys {
    /// Audit id assigned to the current run
    pub const AUDIT_ID: &str = "audit_id";
    /// Session ID for tracking
    pub const SESSION_ID: &str = "session_id";
    /// Strict-mode flag from the evaluation config
    pub const STRICT_MODE: &str = "strict_mode";
    /// Auto-publish target score
    pub const TARGET_SCORE: &str = "target_score";
}

/// Context passed to evaluators during execution
///
/// Supports both untyped JSON values and typed accessors for common fields.
///
/// # Example
///
/// ```
/// use audit_core::AuditContext;
///
/// let ctx = AuditContext::new()
///     .with_session_id("session-123")
///     .with_target_score(114);
///
/// assert_eq!(ctx.session_id(), Some("session-123"));
/// assert_eq!(ctx.target_score(), Some(114));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AuditContext {
    /// Key-value storage for context data
    data: HashMap<String, serde_json::Value>,
}

impl AuditContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    // =========== Builder Methods ===========

    /// Set the audit id
    pub fn with_audit_id(mut self, audit_id: impl Into<String>) -> Self {
        self.insert(keys::AUDIT_ID, serde_json::json!(audit_id.into()));
        self
    }

    /// Set the session ID
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.insert(keys::SESSION_ID, serde_json::json!(session_id.into()));
        self
    }

    /// Set the strict-mode flag
    pub fn with_strict_mode(mut self, strict: bool) -> Self {
        self.insert(keys::STRICT_MODE, serde_json::json!(strict));
        self
    }

    /// Set the auto-publish target score
    pub fn with_target_score(mut self, target: u32) -> Self {
        self.insert(keys::TARGET_SCORE, serde_json::json!(target));
        self
    }

    // =========== Common Accessors ===========

    /// Get the audit id
    pub fn audit_id(&self) -> Option<&str> {
        self.get(keys::AUDIT_ID).and_then(|v| v.as_str())
    }

    /// Get the session ID
    pub fn session_id(&self) -> Option<&str> {
        self.get(keys::SESSION_ID).and_then(|v| v.as_str())
    }

    /// Get the strict-mode flag
    pub fn strict_mode(&self) -> bool {
        self.get(keys::STRICT_MODE)
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false)
    }

    /// Get the auto-publish target score
    pub fn target_score(&self) -> Option<u32> {
        self.get(keys::TARGET_SCORE)
            .and_then(serde_json::Value::as_u64)
            .map(|v| v as u32)
    }

    // =========== Generic Key-Value Operations ===========

    /// Insert a value into the context
    pub fn insert(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.data.insert(key.into(), value);
    }

    /// Get a value from the context
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    /// Insert a typed value into the context
    ///
    /// Serializes the value to JSON before storing.
    pub fn insert_typed<T: Serialize>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> crate::Result<()> {
        let json_value = serde_json::to_value(value).map_err(|e| {
            crate::Error::Generic(format!("Failed to serialize context value: {e}"))
        })?;
        self.data.insert(key.into(), json_value);
        Ok(())
    }

    /// Get a typed value from the context
    ///
    /// Deserializes the JSON value into the specified type.
    pub fn get_typed<T: for<'de> Deserialize<'de>>(&self, key: &str) -> crate::Result<Option<T>> {
        match self.data.get(key) {
            None => Ok(None),
            Some(value) => {
                let typed = serde_json::from_value(value.clone()).map_err(|e| {
                    crate::Error::Generic(format!("Failed to deserialize context value: {e}"))
                })?;
                Ok(Some(typed))
            }
        }
    }

    /// Check if a key exists in the context
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Remove a value from the context
    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.data.remove(key)
    }

    /// Get the number of entries in the context
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the context is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Merge another context into this one (other values override)
    pub fn merge(&mut self, other: AuditContext) {
        self.data.extend(other.data);
    }
}
