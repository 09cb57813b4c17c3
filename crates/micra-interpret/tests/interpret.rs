use micra_core::abx;
use micra_core::models::susceptibility::{Interpretation, ResultOrigin};
use micra_core::models::warning::WarningCode;
use micra_core::org;
use micra_interpret::interpret;

#[test]
fn threshold_equality_is_deterministic() {
    let data = micra_refdata::reference_data().unwrap();
    let ecoli = data.organism(org::ESCHERICHIA_COLI).unwrap();

    // E. coli ceftriaxone: S ≤ 1, R ≥ 4.
    let at_s = interpret::interpret_mic(&data, ecoli, abx::CEFTRIAXONE, "1", None);
    assert_eq!(at_s.result.interpretation, Interpretation::S);

    let at_r = interpret::interpret_mic(&data, ecoli, abx::CEFTRIAXONE, "4", None);
    assert_eq!(at_r.result.interpretation, Interpretation::R);

    let between = interpret::interpret_mic(&data, ecoli, abx::CEFTRIAXONE, "2", None);
    assert_eq!(between.result.interpretation, Interpretation::I);

    // Pure function: identical inputs, identical output.
    let again = interpret::interpret_mic(&data, ecoli, abx::CEFTRIAXONE, "4", None);
    assert_eq!(again.result.interpretation, at_r.result.interpretation);
    assert_eq!(again.result.mic, at_r.result.mic);
}

#[test]
fn unknown_pair_becomes_na_with_warning() {
    let data = micra_refdata::reference_data().unwrap();
    let staph = data.organism(org::STAPHYLOCOCCUS_AUREUS).unwrap();

    // No staphylococcal nitrofurantoin breakpoint is defined.
    let out = interpret::interpret_mic(&data, staph, abx::NITROFURANTOIN, "16", None);
    assert_eq!(out.result.interpretation, Interpretation::Na);
    assert!(out
        .warnings
        .iter()
        .any(|w| w.code == WarningCode::MissingData));
}

#[test]
fn unparsable_mic_becomes_na_with_warning() {
    let data = micra_refdata::reference_data().unwrap();
    let ecoli = data.organism(org::ESCHERICHIA_COLI).unwrap();

    let out = interpret::interpret_mic(&data, ecoli, abx::CEFTRIAXONE, "pending", None);
    assert_eq!(out.result.interpretation, Interpretation::Na);
    assert!(out
        .warnings
        .iter()
        .any(|w| w.code == WarningCode::MalformedInput));
}

#[test]
fn two_category_breakpoint_gap_is_flagged_atypical() {
    let data = micra_refdata::reference_data().unwrap();
    let ecoli = data.organism(org::ESCHERICHIA_COLI).unwrap();

    // TMP-SMX: S ≤ 2, R ≥ 4, no I band. A value of 3 lands between.
    let out = interpret::interpret_mic(
        &data,
        ecoli,
        abx::TRIMETHOPRIM_SULFAMETHOXAZOLE,
        "3",
        None,
    );
    assert_eq!(out.result.interpretation, Interpretation::I);
    assert!(out
        .warnings
        .iter()
        .any(|w| w.code == WarningCode::AtypicalResult));
}

#[test]
fn meningitis_breakpoints_override_systemic() {
    let data = micra_refdata::reference_data().unwrap();
    let spn = data.organism(org::STREPTOCOCCUS_PNEUMONIAE).unwrap();
    let cns = data.site(micra_refdata::sites::CNS).unwrap();

    // Penicillin MIC 1: susceptible systemically, resistant in meningitis.
    let systemic = interpret::interpret_mic(&data, spn, abx::PENICILLIN, "1", None);
    assert_eq!(systemic.result.interpretation, Interpretation::S);

    let meningeal = interpret::interpret_mic(&data, spn, abx::PENICILLIN, "1", Some(cns));
    assert_eq!(meningeal.result.interpretation, Interpretation::R);
}

#[test]
fn implausible_mic_warns_without_altering_interpretation() {
    let data = micra_refdata::reference_data().unwrap();
    let ecoli = data.organism(org::ESCHERICHIA_COLI).unwrap();

    let out = interpret::interpret_mic(&data, ecoli, abx::CEFTRIAXONE, "2048", None);
    assert_eq!(out.result.interpretation, Interpretation::R);
    assert!(out.warnings.iter().any(|w| w.code == WarningCode::QcRange));
}

#[test]
fn curated_note_attaches_on_exact_match() {
    let data = micra_refdata::reference_data().unwrap();
    let staph = data.organism(org::STAPHYLOCOCCUS_AUREUS).unwrap();

    // Staphylococcal cefoxitin screen: R ≥ 8.
    let out = interpret::interpret_mic(&data, staph, abx::CEFOXITIN, "16", None);
    assert_eq!(out.result.interpretation, Interpretation::R);
    assert!(out.result.note.as_deref().unwrap_or("").contains("MRSA"));

    let susceptible = interpret::interpret_mic(&data, staph, abx::CEFOXITIN, "2", None);
    assert!(susceptible.result.note.is_none());
}

#[test]
fn qualitative_entries_carry_origin_and_note() {
    let data = micra_refdata::reference_data().unwrap();
    let ecoli = data.organism(org::ESCHERICHIA_COLI).unwrap();

    let result = interpret::qualitative(
        &data,
        ecoli,
        abx::CEFTRIAXONE,
        Interpretation::R,
        ResultOrigin::Manual,
    );
    assert_eq!(result.origin, ResultOrigin::Manual);
    assert!(result.note.as_deref().unwrap_or("").contains("ESBL"));
}
