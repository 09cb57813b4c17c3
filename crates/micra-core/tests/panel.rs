use micra_core::abx;
use micra_core::models::susceptibility::{
    Interpretation, ResultOrigin, SusceptibilityPanel, SusceptibilityResult,
};

fn result(antibiotic: &str, interpretation: Interpretation) -> SusceptibilityResult {
    SusceptibilityResult {
        antibiotic: antibiotic.to_string(),
        interpretation,
        mic: None,
        origin: ResultOrigin::Tested,
        note: None,
    }
}

#[test]
fn missing_antibiotics_never_match() {
    let panel = SusceptibilityPanel::new(vec![result(abx::CEFTRIAXONE, Interpretation::R)]);

    assert!(panel.interpretation_of(abx::MEROPENEM).is_none());
    assert!(!panel.is(abx::MEROPENEM, Interpretation::S));
    assert!(!panel.is_resistant(abx::MEROPENEM));
}

#[test]
fn group_counting() {
    let panel = SusceptibilityPanel::new(vec![
        result(abx::CEFTRIAXONE, Interpretation::R),
        result(abx::CEFTAZIDIME, Interpretation::R),
        result(abx::CEFOTAXIME, Interpretation::S),
        result(abx::MEROPENEM, Interpretation::I),
    ]);

    assert_eq!(panel.count_resistant(abx::THIRD_GEN_CEPHALOSPORINS), 2);
    assert_eq!(
        panel.count_with(abx::THIRD_GEN_CEPHALOSPORINS, Interpretation::S),
        1
    );
    assert_eq!(panel.count_nonsusceptible(abx::CARBAPENEMS), 1);
}

#[test]
fn viability_requires_s_or_i() {
    let resistant = SusceptibilityPanel::new(vec![
        result(abx::CEFTRIAXONE, Interpretation::R),
        result(abx::MEROPENEM, Interpretation::Na),
    ]);
    assert!(!resistant.has_viable_agent());

    let salvageable = SusceptibilityPanel::new(vec![
        result(abx::CEFTRIAXONE, Interpretation::R),
        result(abx::MEROPENEM, Interpretation::I),
    ]);
    assert!(salvageable.has_viable_agent());
}
