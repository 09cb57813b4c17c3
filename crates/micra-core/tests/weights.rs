use micra_core::models::therapy::{ScoreBreakdown, ScoringWeights};

#[test]
fn default_weights_sum_to_one() {
    assert!(ScoringWeights::default().validate().is_ok());
}

#[test]
fn weights_not_summing_to_one_are_rejected() {
    let weights = ScoringWeights {
        efficacy: 0.5,
        ..ScoringWeights::default()
    };
    assert!(weights.validate().is_err());
}

#[test]
fn negative_weights_are_rejected() {
    let weights = ScoringWeights {
        efficacy: -0.1,
        safety: 0.65,
        ..ScoringWeights::default()
    };
    assert!(weights.validate().is_err());
}

#[test]
fn total_is_the_weighted_sum() {
    let weights = ScoringWeights::default();
    let scores = ScoreBreakdown {
        efficacy: 100.0,
        safety: 100.0,
        stewardship: 100.0,
        pharmacology: 100.0,
        resistance_risk: 100.0,
        convenience: 100.0,
        cost: 100.0,
    };
    assert!((weights.total(&scores) - 100.0).abs() < 1e-9);

    let half = ScoreBreakdown {
        efficacy: 50.0,
        ..scores
    };
    assert!((weights.total(&half) - 85.0).abs() < 1e-9);
}
