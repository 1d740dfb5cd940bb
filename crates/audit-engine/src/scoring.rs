//! Score computation
//!
//! The scoring rules: up to 80 points from body length (one point per 20
//! characters) and up to 20 points from affiliate links (five per link),
//! with the eight detail axes derived from the same two measurements.

use audit_core::DetailedScores;

/// Points earned from body length: one per 20 characters, capped at 80
pub fn content_score(chars: usize) -> u32 {
    std::cmp::min(80, chars / 20) as u32
}

/// Points earned from affiliate links: five per link, capped at 20
pub fn link_score(links: usize) -> u32 {
    std::cmp::min(20, links * 5) as u32
}

/// Total score (content + links)
pub fn total_score(chars: usize, links: usize) -> u32 {
    content_score(chars) + link_score(links)
}

/// Derive the eight detail axes from the body length and link count
pub fn detailed_scores(chars: usize, links: usize) -> DetailedScores {
    let total = total_score(chars, links) as usize;

    DetailedScores {
        seo_optimization: std::cmp::min(15, total / 8) as u32,
        content_quality: std::cmp::min(20, chars / 50) as u32,
        affiliate_integration: std::cmp::min(20, links * 4) as u32,
        link_validity: std::cmp::min(15, links * 3) as u32,
        user_value: std::cmp::min(20, chars / 40) as u32,
        compliance: 8,
        conversion_potential: std::cmp::min(15, links * 3) as u32,
        technical_quality: 4,
    }
}
