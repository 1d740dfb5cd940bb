//! Audit report types

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::score::{DetailedScores, OverallScore};

/// Generate a fresh audit id: `audit_` + local timestamp, 20 characters
pub fn new_audit_id() -> String {
    format!("audit_{}", Local::now().format("%Y%m%d%H%M%S"))
}

/// Severity of an improvement suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Minor,
    Major,
    Critical,
}

/// A concrete suggestion for raising the score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Improvement {
    pub category: String,
    pub severity: Severity,
    pub description: String,
    pub impact_points: u32,
}

/// Outcome of checking a single affiliate link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStatus {
    Valid,
    Redirected,
    Broken,
    Timeout,
    Skipped,
}

/// Validation result for one affiliate link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkValidationResult {
    pub original_url: String,
    pub status: LinkStatus,
    pub redirect_count: u32,
    pub response_time_ms: u64,
}

/// Provenance and timing of the evaluation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub evaluator_version: String,
    pub processing_time_seconds: f64,
    pub ai_model_used: String,
    pub content_length: u64,
}

/// The full audit report returned by an evaluation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub audit_id: String,
    pub timestamp: DateTime<Local>,
    pub overall_score: OverallScore,
    pub detailed_scores: DetailedScores,
    pub improvements: Vec<Improvement>,
    pub link_validation_results: Vec<LinkValidationResult>,
    pub metadata: ReportMetadata,
}

impl AuditReport {
    /// Create a report stamped with a fresh audit id and the current time
    pub fn new(
        overall_score: OverallScore,
        detailed_scores: DetailedScores,
        metadata: ReportMetadata,
    ) -> Self {
        Self {
            audit_id: new_audit_id(),
            timestamp: Local::now(),
            overall_score,
            detailed_scores,
            improvements: Vec::new(),
            link_validation_results: Vec::new(),
            metadata,
        }
    }

    pub fn with_improvements(mut self, improvements: Vec<Improvement>) -> Self {
        self.improvements = improvements;
        self
    }

    pub fn with_link_results(mut self, results: Vec<LinkValidationResult>) -> Self {
        self.link_validation_results = results;
        self
    }

    pub fn add_improvement(&mut self, improvement: Improvement) {
        self.improvements.push(improvement);
    }

    /// True if every checked link came back valid
    pub fn all_links_valid(&self) -> bool {
        self.link_validation_results
            .iter()
            .all(|r| r.status == LinkStatus::Valid)
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        format!(
            "{} - {}/120 ({}){}",
            self.audit_id,
            self.overall_score.total,
            self.overall_score.grade,
            if self.overall_score.auto_publish_eligible {
                " [auto-publish]"
            } else {
                ""
            }
        )
    }
}
