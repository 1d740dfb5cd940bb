//! Content-quality evaluation pipeline
//!
//! This crate implements the audit pipeline behind the orchestrator CLI:
//!
//! - Schema-first request handling (input validated before evaluation,
//!   reports validated before they leave the engine)
//! - Deterministic 8-axis / 120-point scoring with letter grades and the
//!   auto-publish decision
//! - Link validation through the `LinkChecker` seam (offline by default,
//!   rate-limited HTTP with retries when enabled)
//! - Retry with exponential backoff for transient upstream failures
//!
//! # Example
//!
//! ```rust,ignore
//! use audit_engine::AuditEngine;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = AuditEngine::builder().build()?;
//!     let input: serde_json::Value = serde_json::from_str(&request_body)?;
//!     let report = engine.run(&input).await?;
//!     println!("{}", report.summary());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod links;
pub mod retry;
pub mod scoring;

// Re-export main types for convenience
pub use config::{EngineConfig, EngineConfigBuilder};
pub use engine::{AuditEngine, AuditEngineBuilder};
pub use error::{EngineError, Result};
pub use evaluator::HeuristicEvaluator;
pub use links::{HttpLinkChecker, LinkChecker, OfflineLinkChecker};
pub use retry::RetryPolicy;
