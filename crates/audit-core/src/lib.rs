//! Core abstractions and data model for audit-rs
//!
//! This crate defines the audit wire types (input request and report), the
//! scoring model (eight axes, 120 points, letter grades), and the traits and
//! context used by evaluation pipelines.

pub mod context;
pub mod error;
pub mod evaluator;
pub mod input;
pub mod report;
pub mod score;

pub use context::AuditContext;
pub use error::{Error, Result};
pub use evaluator::Evaluator;
pub use input::{AspLink, AuditInput, Content, ContentMeta, EvaluationConfig};
pub use report::{
    AuditReport, Improvement, LinkStatus, LinkValidationResult, ReportMetadata, Severity,
    new_audit_id,
};
pub use score::{AUTO_PUBLISH_THRESHOLD, DetailedScores, Grade, MAX_TOTAL_SCORE, OverallScore};
