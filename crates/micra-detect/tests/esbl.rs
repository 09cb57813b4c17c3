use micra_core::abx;
use micra_core::models::pattern::{DetectionConfidence, MechanismType};
use micra_core::models::susceptibility::{
    Interpretation, ResultOrigin, SusceptibilityPanel, SusceptibilityResult,
};
use micra_detect::config::DetectionThresholds;

fn panel(entries: &[(&str, Interpretation)]) -> SusceptibilityPanel {
    SusceptibilityPanel::new(
        entries
            .iter()
            .map(|(antibiotic, interpretation)| SusceptibilityResult {
                antibiotic: antibiotic.to_string(),
                interpretation: *interpretation,
                mic: None,
                origin: ResultOrigin::Tested,
                note: None,
            })
            .collect(),
    )
}

#[test]
fn classic_esbl_panel_detects_at_least_moderate() {
    let data = micra_refdata::reference_data().unwrap();
    let ecoli = data.organism(micra_core::org::ESCHERICHIA_COLI).unwrap();

    let panel = panel(&[
        (abx::CEFTRIAXONE, Interpretation::R),
        (abx::CEFTAZIDIME, Interpretation::R),
        (abx::CEFEPIME, Interpretation::S),
        (abx::MEROPENEM, Interpretation::S),
        (abx::ERTAPENEM, Interpretation::S),
        (abx::PIPERACILLIN_TAZOBACTAM, Interpretation::S),
    ]);

    let patterns = micra_detect::detect_all(ecoli, &panel, &DetectionThresholds::default());
    let esbl = patterns
        .iter()
        .find(|p| p.mechanism == MechanismType::Esbl)
        .unwrap();

    assert!(esbl.detected);
    assert!(esbl.confidence >= DetectionConfidence::Moderate);
    assert!(!esbl.evidence.is_empty());

    // Overrides target third-generation cephalosporins, never cefepime.
    assert!(esbl
        .override_rules
        .iter()
        .any(|r| r.antibiotic == abx::CEFTRIAXONE));
    assert!(esbl
        .override_rules
        .iter()
        .all(|r| r.antibiotic != abx::CEFEPIME));
}

#[test]
fn single_cephalosporin_resistance_is_not_esbl() {
    let data = micra_refdata::reference_data().unwrap();
    let ecoli = data.organism(micra_core::org::ESCHERICHIA_COLI).unwrap();

    let panel = panel(&[
        (abx::CEFTRIAXONE, Interpretation::R),
        (abx::CEFTAZIDIME, Interpretation::S),
        (abx::CEFOTAXIME, Interpretation::S),
    ]);

    let patterns = micra_detect::detect_all(ecoli, &panel, &DetectionThresholds::default());
    let esbl = patterns
        .iter()
        .find(|p| p.mechanism == MechanismType::Esbl)
        .unwrap();

    assert!(!esbl.detected);
    assert_eq!(esbl.confidence, DetectionConfidence::Uncertain);
}

#[test]
fn full_support_reaches_high_confidence() {
    let data = micra_refdata::reference_data().unwrap();
    let ecoli = data.organism(micra_core::org::ESCHERICHIA_COLI).unwrap();

    let panel = panel(&[
        (abx::CEFTRIAXONE, Interpretation::R),
        (abx::CEFTAZIDIME, Interpretation::R),
        (abx::CEFOTAXIME, Interpretation::R),
        (abx::MEROPENEM, Interpretation::S),
        (abx::ERTAPENEM, Interpretation::S),
        (abx::PIPERACILLIN_TAZOBACTAM, Interpretation::S),
    ]);

    let patterns = micra_detect::detect_all(ecoli, &panel, &DetectionThresholds::default());
    let esbl = patterns
        .iter()
        .find(|p| p.mechanism == MechanismType::Esbl)
        .unwrap();

    assert_eq!(esbl.confidence, DetectionConfidence::High);
}

#[test]
fn esbl_detector_stays_silent_for_gram_positives() {
    let data = micra_refdata::reference_data().unwrap();
    let staph = data.organism(micra_core::org::STAPHYLOCOCCUS_AUREUS).unwrap();

    let panel = panel(&[
        (abx::CEFTRIAXONE, Interpretation::R),
        (abx::CEFTAZIDIME, Interpretation::R),
    ]);

    let patterns = micra_detect::detect_all(staph, &panel, &DetectionThresholds::default());
    let esbl = patterns
        .iter()
        .find(|p| p.mechanism == MechanismType::Esbl)
        .unwrap();

    assert!(!esbl.detected);
}
