use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StrategyKind {
    Monotherapy,
    Combination,
    /// The MDR fallback: not a drug regimen, an action for the clinician.
    Consultation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RecommendationTier {
    Preferred,
    Alternative,
    Consider,
    Avoid,
}

/// Per-dimension scores, each 0–100.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreBreakdown {
    pub efficacy: f64,
    pub safety: f64,
    pub stewardship: f64,
    pub pharmacology: f64,
    pub resistance_risk: f64,
    pub convenience: f64,
    pub cost: f64,
}

/// One ranked candidate therapy. Recomputed fresh per analysis, never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TherapeuticStrategy {
    pub kind: StrategyKind,
    pub agents: Vec<String>,
    pub scores: ScoreBreakdown,
    pub total_score: f64,
    pub tier: RecommendationTier,
    /// Free-text notes explaining scoring adjustments for this strategy.
    pub rationale: Vec<String>,
}

/// Weights combining the seven scoring dimensions. The defaults are
/// heuristic calibrations pending clinical review; any replacement set
/// must still sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringWeights {
    pub efficacy: f64,
    pub safety: f64,
    pub stewardship: f64,
    pub pharmacology: f64,
    pub resistance_risk: f64,
    pub convenience: f64,
    pub cost: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            efficacy: 0.30,
            safety: 0.25,
            stewardship: 0.15,
            pharmacology: 0.15,
            resistance_risk: 0.10,
            convenience: 0.03,
            cost: 0.02,
        }
    }
}

impl ScoringWeights {
    pub fn validate(&self) -> Result<(), CoreError> {
        let parts = [
            self.efficacy,
            self.safety,
            self.stewardship,
            self.pharmacology,
            self.resistance_risk,
            self.convenience,
            self.cost,
        ];
        if parts.iter().any(|w| *w < 0.0) {
            return Err(CoreError::InvalidWeights(
                "weights must be non-negative".to_string(),
            ));
        }
        let sum: f64 = parts.iter().sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(CoreError::InvalidWeights(format!(
                "weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }

    /// Weighted total of a score breakdown.
    pub fn total(&self, scores: &ScoreBreakdown) -> f64 {
        scores.efficacy * self.efficacy
            + scores.safety * self.safety
            + scores.stewardship * self.stewardship
            + scores.pharmacology * self.pharmacology
            + scores.resistance_risk * self.resistance_risk
            + scores.convenience * self.convenience
            + scores.cost * self.cost
    }
}
