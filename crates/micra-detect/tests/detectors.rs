use micra_core::abx;
use micra_core::models::pattern::{DetectionConfidence, MechanismType, ResistancePattern};
use micra_core::models::susceptibility::{
    Interpretation, ResultOrigin, SusceptibilityPanel, SusceptibilityResult,
};
use micra_core::org;
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

fn detect(organism_id: &str, p: &SusceptibilityPanel) -> Vec<ResistancePattern> {
    let data = micra_refdata::reference_data().unwrap();
    let organism = data.organism(organism_id).unwrap();
    micra_detect::detect_all(organism, p, &DetectionThresholds::default())
}

fn pattern(patterns: &[ResistancePattern], mechanism: MechanismType) -> &ResistancePattern {
    patterns
        .iter()
        .find(|p| p.mechanism == mechanism)
        .expect("pattern present")
}

#[test]
fn mrsa_cefoxitin_screen_wins_with_high_confidence() {
    let p = panel(&[
        (abx::CEFOXITIN, Interpretation::R),
        (abx::OXACILLIN, Interpretation::R),
    ]);
    let patterns = detect(org::STAPHYLOCOCCUS_AUREUS, &p);
    let mrsa = pattern(&patterns, MechanismType::Mrsa);

    assert!(mrsa.detected);
    assert_eq!(mrsa.confidence, DetectionConfidence::High);
    // First match wins: a single cefoxitin evidence line, no stacking.
    assert_eq!(mrsa.evidence.len(), 1);
    assert!(mrsa
        .override_rules
        .iter()
        .any(|r| r.antibiotic == abx::MEROPENEM));
}

#[test]
fn mrsa_oxacillin_without_cefoxitin_is_moderate() {
    let p = panel(&[(abx::OXACILLIN, Interpretation::R)]);
    let patterns = detect(org::STAPHYLOCOCCUS_AUREUS, &p);
    let mrsa = pattern(&patterns, MechanismType::Mrsa);

    assert!(mrsa.detected);
    assert_eq!(mrsa.confidence, DetectionConfidence::Moderate);
}

#[test]
fn vre_teicoplanin_splits_van_phenotypes() {
    let van_a = panel(&[
        (abx::VANCOMYCIN, Interpretation::R),
        (abx::TEICOPLANIN, Interpretation::R),
    ]);
    let patterns = detect(org::ENTEROCOCCUS_FAECIUM, &van_a);
    let vre = pattern(&patterns, MechanismType::Vre);
    assert!(vre.detected);
    assert_eq!(vre.confidence, DetectionConfidence::High);

    let van_b = panel(&[
        (abx::VANCOMYCIN, Interpretation::R),
        (abx::TEICOPLANIN, Interpretation::S),
    ]);
    let patterns = detect(org::ENTEROCOCCUS_FAECIUM, &van_b);
    let vre = pattern(&patterns, MechanismType::Vre);
    assert!(vre.detected);
    assert_eq!(vre.confidence, DetectionConfidence::Moderate);

    let vancomycin_susceptible = panel(&[(abx::VANCOMYCIN, Interpretation::S)]);
    let patterns = detect(org::ENTEROCOCCUS_FAECIUM, &vancomycin_susceptible);
    assert!(!pattern(&patterns, MechanismType::Vre).detected);
}

#[test]
fn mlsb_constitutive_and_inducible() {
    let constitutive = panel(&[
        (abx::ERYTHROMYCIN, Interpretation::R),
        (abx::CLINDAMYCIN, Interpretation::R),
    ]);
    let patterns = detect(org::STAPHYLOCOCCUS_AUREUS, &constitutive);
    let mlsb = pattern(&patterns, MechanismType::Mlsb);
    assert!(mlsb.detected);
    assert_eq!(mlsb.confidence, DetectionConfidence::High);
    assert!(mlsb.override_rules.is_empty());

    let inducible = panel(&[
        (abx::ERYTHROMYCIN, Interpretation::R),
        (abx::CLINDAMYCIN, Interpretation::S),
    ]);
    let patterns = detect(org::STAPHYLOCOCCUS_AUREUS, &inducible);
    let mlsb = pattern(&patterns, MechanismType::Mlsb);
    assert!(mlsb.detected);
    assert_eq!(mlsb.confidence, DetectionConfidence::Moderate);
    // The inducible pattern pre-emptively overrides clindamycin.
    assert!(mlsb
        .override_rules
        .iter()
        .any(|r| r.antibiotic == abx::CLINDAMYCIN && r.current == Interpretation::S));
}

#[test]
fn carbapenemase_count_scaling_and_single_agent_caveat() {
    let cascade = panel(&[
        (abx::MEROPENEM, Interpretation::R),
        (abx::ERTAPENEM, Interpretation::R),
        (abx::IMIPENEM, Interpretation::R),
    ]);
    let patterns = detect(org::KLEBSIELLA_PNEUMONIAE, &cascade);
    let carb = pattern(&patterns, MechanismType::Carbapenemase);
    assert!(carb.detected);
    assert_eq!(carb.confidence, DetectionConfidence::High);
    assert!(!carb.override_rules.is_empty());

    let lone = panel(&[
        (abx::ERTAPENEM, Interpretation::R),
        (abx::MEROPENEM, Interpretation::S),
    ]);
    let patterns = detect(org::KLEBSIELLA_PNEUMONIAE, &lone);
    let carb = pattern(&patterns, MechanismType::Carbapenemase);
    assert!(carb.detected);
    assert_eq!(carb.confidence, DetectionConfidence::Low);
    assert!(carb
        .evidence
        .iter()
        .any(|e| e.contains("alternative explanations")));
    // Low confidence carries no overrides.
    assert!(carb.override_rules.is_empty());
}

#[test]
fn mbl_subtype_flagged_when_aztreonam_spared() {
    let p = panel(&[
        (abx::MEROPENEM, Interpretation::R),
        (abx::ERTAPENEM, Interpretation::R),
        (abx::IMIPENEM, Interpretation::R),
        (abx::AZTREONAM, Interpretation::S),
    ]);
    let patterns = detect(org::KLEBSIELLA_PNEUMONIAE, &p);

    let mbl = pattern(&patterns, MechanismType::Mbl);
    assert!(mbl.detected);
    assert!(mbl.confidence <= DetectionConfidence::Moderate);
}

#[test]
fn subtypes_never_appear_without_a_parent() {
    let p = panel(&[(abx::MEROPENEM, Interpretation::S)]);
    let patterns = detect(org::KLEBSIELLA_PNEUMONIAE, &p);

    assert!(patterns
        .iter()
        .all(|p| !p.mechanism.is_carbapenemase_subtype()));
}

#[test]
fn ampc_requires_its_cefoxitin_gate() {
    let positive = panel(&[
        (abx::CEFOXITIN, Interpretation::R),
        (abx::CEFAZOLIN, Interpretation::R),
        (abx::AMOXICILLIN_CLAVULANATE, Interpretation::R),
        (abx::MEROPENEM, Interpretation::S),
    ]);
    let patterns = detect(org::ESCHERICHIA_COLI, &positive);
    let ampc = pattern(&patterns, MechanismType::Ampc);
    assert!(ampc.detected);
    assert_eq!(ampc.confidence, DetectionConfidence::High);

    let negative = panel(&[
        (abx::CEFAZOLIN, Interpretation::R),
        (abx::CEFOXITIN, Interpretation::S),
    ]);
    let patterns = detect(org::ESCHERICHIA_COLI, &negative);
    assert!(!pattern(&patterns, MechanismType::Ampc).detected);
}

#[test]
fn inducible_species_detect_ampc_by_derepression() {
    // Enterobacter never shows cefoxitin on the panel (intrinsic), but
    // third-generation cephalosporin resistance marks derepression.
    let p = panel(&[
        (abx::CEFTRIAXONE, Interpretation::R),
        (abx::CEFTAZIDIME, Interpretation::R),
        (abx::PIPERACILLIN_TAZOBACTAM, Interpretation::R),
        (abx::MEROPENEM, Interpretation::S),
    ]);
    let patterns = detect(org::ENTEROBACTER_CLOACAE, &p);
    let ampc = pattern(&patterns, MechanismType::Ampc);
    assert!(ampc.detected);
    assert!(ampc.confidence >= DetectionConfidence::Moderate);
}

#[test]
fn fluoroquinolone_class_rule() {
    let class_wide = panel(&[
        (abx::CIPROFLOXACIN, Interpretation::R),
        (abx::LEVOFLOXACIN, Interpretation::R),
        (abx::MOXIFLOXACIN, Interpretation::R),
    ]);
    let patterns = detect(org::ESCHERICHIA_COLI, &class_wide);
    let fqr = pattern(&patterns, MechanismType::FluoroquinoloneResistance);
    assert_eq!(fqr.confidence, DetectionConfidence::High);
    assert!(!fqr.override_rules.is_empty());

    let single = panel(&[
        (abx::CIPROFLOXACIN, Interpretation::R),
        (abx::LEVOFLOXACIN, Interpretation::S),
    ]);
    let patterns = detect(org::ESCHERICHIA_COLI, &single);
    let fqr = pattern(&patterns, MechanismType::FluoroquinoloneResistance);
    assert!(fqr.detected);
    assert_eq!(fqr.confidence, DetectionConfidence::Moderate);
    // A first-step mutant does not condemn the class.
    assert!(fqr.override_rules.is_empty());
}

#[test]
fn single_aminoglycoside_resistance_is_not_class_resistance() {
    let single = panel(&[
        (abx::GENTAMICIN, Interpretation::R),
        (abx::TOBRAMYCIN, Interpretation::S),
    ]);
    let patterns = detect(org::ESCHERICHIA_COLI, &single);
    assert!(!pattern(&patterns, MechanismType::AminoglycosideResistance).detected);

    let double = panel(&[
        (abx::GENTAMICIN, Interpretation::R),
        (abx::TOBRAMYCIN, Interpretation::R),
    ]);
    let patterns = detect(org::ESCHERICHIA_COLI, &double);
    let agr = pattern(&patterns, MechanismType::AminoglycosideResistance);
    assert!(agr.detected);
    assert_eq!(agr.confidence, DetectionConfidence::Moderate);
    assert!(agr.override_rules.is_empty());
}

#[test]
fn simple_penicillinase_scenario() {
    let p = panel(&[
        (abx::AMPICILLIN, Interpretation::R),
        (abx::CEFAZOLIN, Interpretation::S),
    ]);
    let patterns = detect(org::ESCHERICHIA_COLI, &p);
    let penicillinase = pattern(&patterns, MechanismType::Penicillinase);

    assert!(penicillinase.detected);
    assert_eq!(penicillinase.confidence, DetectionConfidence::High);
    // No cephalosporin overrides from a simple penicillinase.
    assert!(penicillinase.override_rules.is_empty());
}

#[test]
fn empty_panel_detects_nothing_and_nothing_throws() {
    let p = panel(&[]);
    let patterns = detect(org::ESCHERICHIA_COLI, &p);
    assert!(patterns.iter().all(|p| !p.detected));
    assert!(patterns
        .iter()
        .all(|p| p.confidence == DetectionConfidence::Uncertain));
}
