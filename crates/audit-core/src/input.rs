//! Audit request types
//!
//! These types mirror the audit input JSON contract: an article with its
//! targeting metadata, the affiliate (ASP) links embedded in it, and optional
//! evaluation configuration.

use serde::{Deserialize, Serialize};

use crate::score::AUTO_PUBLISH_THRESHOLD;

/// A complete audit request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditInput {
    pub content: Content,
    pub asp_links: Vec<AspLink>,
    #[serde(default)]
    pub evaluation_config: Option<EvaluationConfig>,
}

/// Article under evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub title: String,
    pub body: String,
    pub meta: ContentMeta,
}

/// Targeting metadata attached to the article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentMeta {
    pub target_keyword: String,
    pub product_category: String,
    pub asp_provider: String,
}

/// An affiliate link embedded in the article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AspLink {
    pub url: String,
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission_rate: Option<f64>,
    pub priority: u32,
}

/// Per-request evaluation tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Require every checked link to be valid before auto-publishing
    #[serde(default)]
    pub strict_mode: bool,

    /// Score at which the content becomes eligible for auto-publishing
    #[serde(default = "default_target_score")]
    pub target_score: u32,

    /// Run link validation as part of the audit
    #[serde(default = "default_check_link_validity")]
    pub check_link_validity: bool,
}

fn default_target_score() -> u32 {
    AUTO_PUBLISH_THRESHOLD
}

fn default_check_link_validity() -> bool {
    true
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            strict_mode: false,
            target_score: AUTO_PUBLISH_THRESHOLD,
            check_link_validity: true,
        }
    }
}

impl AuditInput {
    /// Body length in characters (not bytes)
    pub fn content_length(&self) -> usize {
        self.content.body.chars().count()
    }

    /// Number of affiliate links in the request
    pub fn link_count(&self) -> usize {
        self.asp_links.len()
    }

    /// Effective evaluation configuration (defaults when absent)
    pub fn config(&self) -> EvaluationConfig {
        self.evaluation_config.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> AuditInput {
        AuditInput {
            content: Content {
                title: "Best Gaming Laptops 2024".to_string(),
                body: "Gaming laptops have evolved significantly.".to_string(),
                meta: ContentMeta {
                    target_keyword: "gaming laptops 2024".to_string(),
                    product_category: "electronics".to_string(),
                    asp_provider: "amazon".to_string(),
                },
            },
            asp_links: vec![AspLink {
                url: "https://example.com/affiliate/laptop1".to_string(),
                product_name: "Gaming Laptop Pro".to_string(),
                commission_rate: Some(5.5),
                priority: 1,
            }],
            evaluation_config: None,
        }
    }

    #[test]
    fn test_content_length_counts_chars() {
        let mut input = sample_input();
        input.content.body = "株式会社".to_string();
        assert_eq!(input.content_length(), 4);
    }

    #[test]
    fn test_config_defaults() {
        let input = sample_input();
        let config = input.config();
        assert!(!config.strict_mode);
        assert_eq!(config.target_score, 114);
        assert!(config.check_link_validity);
    }

    #[test]
    fn test_deserialize_minimal_config() {
        let json = r#"{"strict_mode": true}"#;
        let config: EvaluationConfig = serde_json::from_str(json).unwrap();
        assert!(config.strict_mode);
        assert_eq!(config.target_score, 114);
        assert!(config.check_link_validity);
    }

    #[test]
    fn test_roundtrip() {
        let input = sample_input();
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["content"]["meta"]["asp_provider"], "amazon");
        let back: AuditInput = serde_json::from_value(json).unwrap();
        assert_eq!(back.link_count(), 1);
    }
}
