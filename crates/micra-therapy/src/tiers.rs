//! Recommendation tier assignment from total score and component floors.

use micra_core::models::therapy::{RecommendationTier, ScoreBreakdown};

/// Preferred demands both a strong total and floors on efficacy and
/// safety: a cheap, convenient, but marginally effective agent must not
/// outrank an effective one into the top tier.
pub fn assign(total_score: f64, scores: &ScoreBreakdown) -> RecommendationTier {
    if total_score >= 80.0 && scores.efficacy >= 70.0 && scores.safety >= 60.0 {
        RecommendationTier::Preferred
    } else if total_score >= 60.0 && scores.efficacy >= 50.0 {
        RecommendationTier::Alternative
    } else if total_score >= 40.0 {
        RecommendationTier::Consider
    } else {
        RecommendationTier::Avoid
    }
}
