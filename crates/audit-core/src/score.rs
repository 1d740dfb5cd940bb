//! Scoring model: eight axes, 120 points, letter grades

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum achievable total score across all axes
pub const MAX_TOTAL_SCORE: u32 = 120;

/// Default score at which content becomes eligible for auto-publishing
pub const AUTO_PUBLISH_THRESHOLD: u32 = 114;

/// Letter grade derived from the total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Grade {
    Elite,
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Grade {
    /// Grade boundaries: ELITE >= 114, EXCELLENT >= 100, GOOD >= 80, FAIR >= 60
    pub fn from_score(total: u32) -> Self {
        if total >= 114 {
            Self::Elite
        } else if total >= 100 {
            Self::Excellent
        } else if total >= 80 {
            Self::Good
        } else if total >= 60 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Elite => "ELITE",
            Self::Excellent => "EXCELLENT",
            Self::Good => "GOOD",
            Self::Fair => "FAIR",
            Self::Poor => "POOR",
        };
        write!(f, "{s}")
    }
}

/// Headline score of an audit report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallScore {
    pub total: u32,
    pub grade: Grade,
    pub auto_publish_eligible: bool,
}

impl OverallScore {
    /// Derive grade and auto-publish eligibility from a total score
    pub fn new(total: u32, target_score: u32) -> Self {
        Self {
            total,
            grade: Grade::from_score(total),
            auto_publish_eligible: total >= target_score,
        }
    }
}

/// Per-axis scores
///
/// Axis caps: seo 15, content 20, affiliate 20, link validity 15, user value
/// 20, compliance 10, conversion 15, technical 5 (120 points total).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DetailedScores {
    pub seo_optimization: u32,
    pub content_quality: u32,
    pub affiliate_integration: u32,
    pub link_validity: u32,
    pub user_value: u32,
    pub compliance: u32,
    pub conversion_potential: u32,
    pub technical_quality: u32,
}

impl DetailedScores {
    pub const SEO_MAX: u32 = 15;
    pub const CONTENT_MAX: u32 = 20;
    pub const AFFILIATE_MAX: u32 = 20;
    pub const LINK_VALIDITY_MAX: u32 = 15;
    pub const USER_VALUE_MAX: u32 = 20;
    pub const COMPLIANCE_MAX: u32 = 10;
    pub const CONVERSION_MAX: u32 = 15;
    pub const TECHNICAL_MAX: u32 = 5;

    /// Sum of all axis scores
    pub fn axis_sum(&self) -> u32 {
        self.seo_optimization
            + self.content_quality
            + self.affiliate_integration
            + self.link_validity
            + self.user_value
            + self.compliance
            + self.conversion_potential
            + self.technical_quality
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(Grade::from_score(120), Grade::Elite);
        assert_eq!(Grade::from_score(114), Grade::Elite);
        assert_eq!(Grade::from_score(113), Grade::Excellent);
        assert_eq!(Grade::from_score(100), Grade::Excellent);
        assert_eq!(Grade::from_score(99), Grade::Good);
        assert_eq!(Grade::from_score(80), Grade::Good);
        assert_eq!(Grade::from_score(79), Grade::Fair);
        assert_eq!(Grade::from_score(60), Grade::Fair);
        assert_eq!(Grade::from_score(59), Grade::Poor);
        assert_eq!(Grade::from_score(0), Grade::Poor);
    }

    #[test]
    fn test_grade_serializes_uppercase() {
        let json = serde_json::to_string(&Grade::Elite).unwrap();
        assert_eq!(json, "\"ELITE\"");
        let back: Grade = serde_json::from_str("\"POOR\"").unwrap();
        assert_eq!(back, Grade::Poor);
    }

    #[test]
    fn test_overall_score_auto_publish() {
        let score = OverallScore::new(114, AUTO_PUBLISH_THRESHOLD);
        assert!(score.auto_publish_eligible);
        assert_eq!(score.grade, Grade::Elite);

        let below = OverallScore::new(113, AUTO_PUBLISH_THRESHOLD);
        assert!(!below.auto_publish_eligible);

        // custom target lowers the bar without changing the grade
        let custom = OverallScore::new(100, 90);
        assert!(custom.auto_publish_eligible);
        assert_eq!(custom.grade, Grade::Excellent);
    }

    #[test]
    fn test_axis_caps_sum_to_max() {
        let total = DetailedScores::SEO_MAX
            + DetailedScores::CONTENT_MAX
            + DetailedScores::AFFILIATE_MAX
            + DetailedScores::LINK_VALIDITY_MAX
            + DetailedScores::USER_VALUE_MAX
            + DetailedScores::COMPLIANCE_MAX
            + DetailedScores::CONVERSION_MAX
            + DetailedScores::TECHNICAL_MAX;
        assert_eq!(total, MAX_TOTAL_SCORE);
    }

    #[test]
    fn test_axis_sum() {
        let scores = DetailedScores {
            seo_optimization: 10,
            content_quality: 15,
            affiliate_integration: 8,
            link_validity: 3,
            user_value: 12,
            compliance: 8,
            conversion_potential: 3,
            technical_quality: 4,
        };
        assert_eq!(scores.axis_sum(), 63);
    }
}
