//! Deterministic heuristic evaluator
//!
//! The shipped `Evaluator` implementation. Scores are derived entirely from
//! body length and link count, so the same input always produces the same
//! report (audit id and timing aside). AI-backed evaluators implement the
//! same trait.

use crate::scoring;
use async_trait::async_trait;
use audit_core::context::keys;
use audit_core::{
    AuditContext, AuditInput, AuditReport, DetailedScores, Evaluator, Improvement, OverallScore,
    ReportMetadata, Severity,
};
use std::time::Instant;
use tracing::debug;

/// Model tag stamped into report metadata
pub const MODEL_TAG: &str = "heuristic-v1";

/// Evaluator backed by the deterministic scoring rules
pub struct HeuristicEvaluator {
    version: String,
}

impl HeuristicEvaluator {
    /// Create a new heuristic evaluator
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version stamped into report metadata
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

impl Default for HeuristicEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Evaluator for HeuristicEvaluator {
    async fn evaluate(
        &self,
        input: &AuditInput,
        context: &mut AuditContext,
    ) -> audit_core::Result<AuditReport> {
        let started = Instant::now();

        let config = input.config();
        let target_score = context.target_score().unwrap_or(config.target_score);

        let chars = input.content_length();
        let links = input.link_count();

        let total = scoring::total_score(chars, links);
        let detailed = scoring::detailed_scores(chars, links);

        let metadata = ReportMetadata {
            evaluator_version: self.version.clone(),
            processing_time_seconds: started.elapsed().as_secs_f64(),
            ai_model_used: MODEL_TAG.to_string(),
            content_length: chars as u64,
        };

        let report = AuditReport::new(OverallScore::new(total, target_score), detailed, metadata)
            .with_improvements(suggest_improvements(&detailed));

        context.insert(keys::AUDIT_ID, serde_json::json!(report.audit_id.clone()));

        debug!(
            audit_id = %report.audit_id,
            total,
            chars,
            links,
            "Heuristic evaluation complete"
        );

        Ok(report)
    }

    fn name(&self) -> &str {
        "HeuristicEvaluator"
    }
}

/// Derive improvement suggestions from the axes that are below their caps
fn suggest_improvements(scores: &DetailedScores) -> Vec<Improvement> {
    let mut improvements = Vec::new();

    if scores.seo_optimization < DetailedScores::SEO_MAX {
        improvements.push(Improvement {
            category: "seo".to_string(),
            severity: Severity::Minor,
            description: "Consider adding more targeted keywords".to_string(),
            impact_points: 3,
        });
    }

    if scores.content_quality < DetailedScores::CONTENT_MAX {
        let gap = DetailedScores::CONTENT_MAX - scores.content_quality;
        improvements.push(Improvement {
            category: "content".to_string(),
            severity: if scores.content_quality < 10 {
                Severity::Major
            } else {
                Severity::Minor
            },
            description: "Expand the article body with more detailed comparisons".to_string(),
            impact_points: gap,
        });
    }

    if scores.affiliate_integration < DetailedScores::AFFILIATE_MAX {
        improvements.push(Improvement {
            category: "affiliate".to_string(),
            severity: Severity::Minor,
            description: "Add affiliate links for the remaining recommended products".to_string(),
            impact_points: DetailedScores::AFFILIATE_MAX - scores.affiliate_integration,
        });
    }

    improvements
}

#[cfg(test)]
mod tests {
    use super::*;
    use audit_core::{AspLink, Content, ContentMeta, Grade};

    fn sample_input(body: String, link_count: usize) -> AuditInput {
        let asp_links = (0..link_count)
            .map(|i| AspLink {
                url: format!("https://example.com/affiliate/product{i}"),
                product_name: format!("Product {i}"),
                commission_rate: Some(5.5),
                priority: 1,
            })
            .collect();

        AuditInput {
            content: Content {
                title: "Best Gaming Laptops 2024".to_string(),
                body,
                meta: ContentMeta {
                    target_keyword: "gaming laptops 2024".to_string(),
                    product_category: "electronics".to_string(),
                    asp_provider: "amazon".to_string(),
                },
            },
            asp_links,
            evaluation_config: None,
        }
    }

    #[tokio::test]
    async fn test_report_structure() {
        let evaluator = HeuristicEvaluator::new();
        let mut ctx = AuditContext::new();
        let input = sample_input("Gaming laptops have evolved. ".repeat(20), 1);

        let report = evaluator.evaluate(&input, &mut ctx).await.unwrap();

        let json = serde_json::to_value(&report).unwrap();
        for field in [
            "audit_id",
            "timestamp",
            "overall_score",
            "detailed_scores",
            "improvements",
            "link_validation_results",
            "metadata",
        ] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }

        assert!(matches!(
            report.overall_score.grade,
            Grade::Elite | Grade::Excellent | Grade::Good | Grade::Fair | Grade::Poor
        ));
        assert_eq!(report.metadata.ai_model_used, MODEL_TAG);
    }

    #[tokio::test]
    async fn test_longer_content_scores_higher() {
        let evaluator = HeuristicEvaluator::new();

        let short = sample_input("Short content".to_string(), 1);
        let long = sample_input("Very long content ".repeat(100), 1);

        let mut ctx = AuditContext::new();
        let short_report = evaluator.evaluate(&short, &mut ctx).await.unwrap();
        let long_report = evaluator.evaluate(&long, &mut ctx).await.unwrap();

        assert!(long_report.overall_score.total > short_report.overall_score.total);
    }

    #[tokio::test]
    async fn test_audit_id_recorded_in_context() {
        let evaluator = HeuristicEvaluator::new();
        let mut ctx = AuditContext::new();
        let input = sample_input("body".to_string(), 0);

        let report = evaluator.evaluate(&input, &mut ctx).await.unwrap();
        assert_eq!(ctx.audit_id(), Some(report.audit_id.as_str()));
    }

    #[tokio::test]
    async fn test_target_score_from_context_wins() {
        let evaluator = HeuristicEvaluator::new();
        let mut ctx = AuditContext::new().with_target_score(50);
        // 2000 chars + 1 link = 85 points, eligible against a target of 50
        let input = sample_input("a".repeat(2000), 1);

        let report = evaluator.evaluate(&input, &mut ctx).await.unwrap();
        assert_eq!(report.overall_score.total, 85);
        assert!(report.overall_score.auto_publish_eligible);
    }

    #[tokio::test]
    async fn test_empty_body_and_links_is_poor() {
        let evaluator = HeuristicEvaluator::new();
        let mut ctx = AuditContext::new();
        let input = sample_input(String::new(), 0);

        let report = evaluator.evaluate(&input, &mut ctx).await.unwrap();
        assert_eq!(report.overall_score.total, 0);
        assert_eq!(report.overall_score.grade, Grade::Poor);
        assert!(!report.overall_score.auto_publish_eligible);
    }

    #[test]
    fn test_improvements_cover_uncapped_axes() {
        let scores = scoring::detailed_scores(400, 1);
        let improvements = suggest_improvements(&scores);

        let categories: Vec<&str> = improvements.iter().map(|i| i.category.as_str()).collect();
        assert!(categories.contains(&"seo"));
        assert!(categories.contains(&"content"));
        assert!(categories.contains(&"affiliate"));

        let seo = improvements.iter().find(|i| i.category == "seo").unwrap();
        assert_eq!(seo.severity, Severity::Minor);
        assert_eq!(seo.impact_points, 3);
        assert_eq!(seo.description, "Consider adding more targeted keywords");
    }

    #[test]
    fn test_no_improvements_at_caps() {
        // well past every cap
        let scores = scoring::detailed_scores(100_000, 100);
        // seo caps at 12 for a 100-point total, so the seo suggestion remains
        let improvements = suggest_improvements(&scores);
        assert!(improvements.iter().all(|i| i.category == "seo"));
    }
}
