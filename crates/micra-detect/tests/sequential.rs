use micra_core::abx;
use micra_core::models::pattern::MechanismType;
use micra_core::models::susceptibility::{
    Interpretation, ResultOrigin, SusceptibilityPanel, SusceptibilityResult,
};
use micra_core::org;
use micra_detect::sequential;

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

fn ecoli() -> micra_core::reference::organism::OrganismRecord {
    micra_refdata::reference_data()
        .unwrap()
        .organism(org::ESCHERICHIA_COLI)
        .unwrap()
        .clone()
}

#[test]
fn wild_type_stops_at_the_first_rung() {
    let finding = sequential::analyze(
        &ecoli(),
        &panel(&[(abx::AMPICILLIN, Interpretation::S)]),
    )
    .unwrap();

    assert_eq!(finding.steps.len(), 1);
    assert!(finding.mechanism.is_none());
    assert!(finding.narrative.contains("no acquired beta-lactamase"));
}

#[test]
fn narrow_penicillinase_is_named_at_the_second_rung() {
    let finding = sequential::analyze(
        &ecoli(),
        &panel(&[
            (abx::AMPICILLIN, Interpretation::R),
            (abx::CEFAZOLIN, Interpretation::S),
        ]),
    )
    .unwrap();

    assert_eq!(finding.mechanism, Some(MechanismType::Penicillinase));
    assert_eq!(finding.steps.len(), 2);
}

#[test]
fn inhibitor_restoration_concludes_esbl() {
    let finding = sequential::analyze(
        &ecoli(),
        &panel(&[
            (abx::AMPICILLIN, Interpretation::R),
            (abx::CEFAZOLIN, Interpretation::R),
            (abx::CEFTRIAXONE, Interpretation::R),
            (abx::PIPERACILLIN_TAZOBACTAM, Interpretation::S),
        ]),
    )
    .unwrap();

    assert_eq!(finding.mechanism, Some(MechanismType::Esbl));
}

#[test]
fn no_restoration_with_spared_carbapenem_concludes_ampc() {
    let finding = sequential::analyze(
        &ecoli(),
        &panel(&[
            (abx::AMPICILLIN, Interpretation::R),
            (abx::CEFAZOLIN, Interpretation::R),
            (abx::CEFTRIAXONE, Interpretation::R),
            (abx::PIPERACILLIN_TAZOBACTAM, Interpretation::R),
            (abx::MEROPENEM, Interpretation::S),
        ]),
    )
    .unwrap();

    assert_eq!(finding.mechanism, Some(MechanismType::Ampc));
}

#[test]
fn resistance_up_the_whole_ladder_concludes_carbapenemase() {
    let finding = sequential::analyze(
        &ecoli(),
        &panel(&[
            (abx::AMPICILLIN, Interpretation::R),
            (abx::CEFAZOLIN, Interpretation::R),
            (abx::CEFTRIAXONE, Interpretation::R),
            (abx::PIPERACILLIN_TAZOBACTAM, Interpretation::R),
            (abx::MEROPENEM, Interpretation::R),
        ]),
    )
    .unwrap();

    assert_eq!(finding.mechanism, Some(MechanismType::Carbapenemase));
    assert_eq!(finding.steps.len(), 5);
}

#[test]
fn missing_inhibitor_data_says_so_instead_of_guessing() {
    let finding = sequential::analyze(
        &ecoli(),
        &panel(&[
            (abx::AMPICILLIN, Interpretation::R),
            (abx::CEFAZOLIN, Interpretation::R),
            (abx::CEFTRIAXONE, Interpretation::R),
        ]),
    )
    .unwrap();

    assert!(finding.mechanism.is_none());
    assert!(finding.narrative.contains("ESBL"));
    assert!(finding.narrative.contains("AmpC"));
}

#[test]
fn intrinsic_resistance_counts_as_a_resistant_rung() {
    // Klebsiella never carries ampicillin on the panel; the ladder still
    // walks past rung one.
    let data = micra_refdata::reference_data().unwrap();
    let klebsiella = data.organism(org::KLEBSIELLA_PNEUMONIAE).unwrap();

    let finding = sequential::analyze(
        klebsiella,
        &panel(&[(abx::CEFAZOLIN, Interpretation::S)]),
    )
    .unwrap();

    assert_eq!(finding.mechanism, Some(MechanismType::Penicillinase));
}

#[test]
fn only_enterobacterales_walk_the_ladder() {
    let data = micra_refdata::reference_data().unwrap();
    let staph = data.organism(org::STAPHYLOCOCCUS_AUREUS).unwrap();

    assert!(sequential::analyze(staph, &panel(&[])).is_none());
}
