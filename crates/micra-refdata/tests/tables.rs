use micra_core::abx;
use micra_core::org;
use micra_core::reference::organism::OrganismCategory;

#[test]
fn embedded_bundle_validates() {
    // from_bundle runs the full fail-closed validation: monotonic
    // breakpoints, resolvable intrinsic-resistance and ineffective-agent
    // ids, non-empty tables.
    assert!(micra_refdata::reference_data().is_ok());
}

#[test]
fn every_breakpoint_is_monotonic() {
    let data = micra_refdata::reference_data().unwrap();
    for entry in data.breakpoint_entries() {
        assert!(
            entry.breakpoint.is_monotonic(),
            "non-monotonic breakpoint for {:?}/{}",
            entry.category,
            entry.antibiotic,
        );
    }
}

#[test]
fn trimethoprim_sulfamethoxazole_is_two_category() {
    let data = micra_refdata::reference_data().unwrap();
    let bp = data
        .breakpoint(
            OrganismCategory::Enterobacterales,
            abx::TRIMETHOPRIM_SULFAMETHOXAZOLE,
            None,
        )
        .expect("breakpoint present");
    assert!(bp.intermediate.is_none());
}

#[test]
fn pneumococcal_meningitis_breakpoints_differ_from_systemic() {
    let data = micra_refdata::reference_data().unwrap();

    let systemic = data
        .breakpoint(
            OrganismCategory::StreptococcusPneumoniae,
            abx::PENICILLIN,
            None,
        )
        .expect("systemic penicillin breakpoint");
    let meningeal = data
        .breakpoint(
            OrganismCategory::StreptococcusPneumoniae,
            abx::PENICILLIN,
            Some(micra_refdata::sites::CNS),
        )
        .expect("meningitis penicillin breakpoint");

    assert!(meningeal.resistant < systemic.susceptible);
}

#[test]
fn known_organisms_resolve() {
    let data = micra_refdata::reference_data().unwrap();
    for id in [
        org::ESCHERICHIA_COLI,
        org::KLEBSIELLA_PNEUMONIAE,
        org::ENTEROBACTER_CLOACAE,
        org::PSEUDOMONAS_AERUGINOSA,
        org::STAPHYLOCOCCUS_AUREUS,
        org::ENTEROCOCCUS_FAECIUM,
        org::STREPTOCOCCUS_PNEUMONIAE,
    ] {
        assert!(data.organism(id).is_some(), "missing organism {id}");
    }
}

#[test]
fn klebsiella_is_intrinsically_ampicillin_resistant() {
    let data = micra_refdata::reference_data().unwrap();
    let kp = data.organism(org::KLEBSIELLA_PNEUMONIAE).unwrap();
    assert!(kp.is_intrinsically_resistant(abx::AMPICILLIN));
    assert!(!kp.is_intrinsically_resistant(abx::MEROPENEM));
}

#[test]
fn respiratory_site_suppresses_daptomycin() {
    let data = micra_refdata::reference_data().unwrap();
    let site = data.site(micra_refdata::sites::RESPIRATORY).unwrap();
    assert!(site.is_ineffective(abx::DAPTOMYCIN));
}
