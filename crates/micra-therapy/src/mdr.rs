//! The multidrug-resistance fallback: when nothing on the panel remains
//! treatable the scorer returns this fixed, non-empty consultation set
//! instead of an empty list.

use micra_core::models::therapy::{
    ScoreBreakdown, ScoringWeights, StrategyKind, TherapeuticStrategy,
};

use crate::tiers;

fn consultation(
    weights: &ScoringWeights,
    scores: ScoreBreakdown,
    rationale: &[&str],
) -> TherapeuticStrategy {
    let total_score = weights.total(&scores);
    TherapeuticStrategy {
        kind: StrategyKind::Consultation,
        agents: Vec::new(),
        scores,
        total_score,
        tier: tiers::assign(total_score, &scores),
        rationale: rationale.iter().map(|s| s.to_string()).collect(),
    }
}

/// Fixed, illustrative strategies for the fully resistant organism.
pub fn consultation_strategies(weights: &ScoringWeights) -> Vec<TherapeuticStrategy> {
    vec![
        consultation(
            weights,
            ScoreBreakdown {
                efficacy: 50.0,
                safety: 90.0,
                stewardship: 80.0,
                pharmacology: 50.0,
                resistance_risk: 80.0,
                convenience: 50.0,
                cost: 90.0,
            },
            &[
                "No tested agent remains susceptible or intermediate",
                "Urgent infectious diseases consultation is required before empiric escalation",
            ],
        ),
        consultation(
            weights,
            ScoreBreakdown {
                efficacy: 40.0,
                safety: 60.0,
                stewardship: 50.0,
                pharmacology: 50.0,
                resistance_risk: 70.0,
                convenience: 40.0,
                cost: 50.0,
            },
            &[
                "Consider salvage combination therapy guided by specialist advice",
                "In-vitro synergy testing may identify active pairings",
            ],
        ),
        consultation(
            weights,
            ScoreBreakdown {
                efficacy: 30.0,
                safety: 90.0,
                stewardship: 70.0,
                pharmacology: 40.0,
                resistance_risk: 80.0,
                convenience: 40.0,
                cost: 60.0,
            },
            &[
                "Request extended-panel susceptibility testing including novel agents",
                "Molecular resistance profiling can direct targeted options",
            ],
        ),
    ]
}
