//! Core Evaluator trait definition

use crate::{AuditContext, AuditInput, AuditReport, Result};
use async_trait::async_trait;

/// Trait implemented by every content evaluator
///
/// An evaluator turns an audit request into a scored report. The shipped
/// implementation is the deterministic heuristic evaluator in audit-engine;
/// AI-backed evaluators plug in behind the same seam.
#[async_trait]
pub trait Evaluator: Send + Sync {
    /// Evaluate the content and produce a report
    ///
    /// Link validation is not the evaluator's concern: the engine overlays
    /// link results after evaluation when it is enabled.
    async fn evaluate(&self, input: &AuditInput, context: &mut AuditContext)
    -> Result<AuditReport>;

    /// Get the evaluator's name
    fn name(&self) -> &str;

    /// Initialize the evaluator (optional)
    async fn initialize(&mut self) -> Result<()> {
        Ok(())
    }

    /// Shutdown the evaluator (optional)
    async fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}
