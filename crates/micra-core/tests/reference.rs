use micra_core::models::susceptibility::Interpretation;
use micra_core::reference::breakpoint::{Breakpoint, BreakpointEntry};
use micra_core::reference::drug::{
    Activity, CostTier, DrugClass, DrugMonograph, RiskLevel, Route, Spectrum, StewardshipClass,
};
use micra_core::reference::organism::{GramStain, OrganismCategory, OrganismRecord};
use micra_core::reference::site::{DosingIntensity, InfectionSite, PenetrationClass};
use micra_core::reference::{ClinicalAnnotation, ReferenceBundle, ReferenceData};

fn monograph(id: &str) -> DrugMonograph {
    DrugMonograph {
        id: id.to_string(),
        name: id.to_string(),
        class: DrugClass::Cephalosporin3,
        spectrum: Spectrum::Broad,
        activity: Activity::Bactericidal,
        stewardship: StewardshipClass::Standard,
        renal_adjustment: false,
        hepatic_adjustment: false,
        interaction_risk: RiskLevel::Low,
        elderly_caution: false,
        resistance_induction: RiskLevel::Low,
        cost_tier: CostTier::Low,
        route: Route::Intravenous,
        doses_per_day: 1,
        cns_penetration: false,
        urine_concentration: false,
    }
}

fn entry(antibiotic: &str, site: Option<&str>, s: f64, i: Option<f64>, r: f64) -> BreakpointEntry {
    BreakpointEntry {
        category: OrganismCategory::Enterobacterales,
        antibiotic: antibiotic.to_string(),
        site: site.map(str::to_string),
        breakpoint: Breakpoint {
            susceptible: s,
            intermediate: i,
            resistant: r,
        },
    }
}

fn bundle() -> ReferenceBundle {
    ReferenceBundle {
        organisms: vec![OrganismRecord {
            id: "escherichia_coli".to_string(),
            name: "Escherichia coli".to_string(),
            category: OrganismCategory::Enterobacterales,
            gram_stain: GramStain::Negative,
            intrinsic_resistance: Vec::new(),
            ampc_inducible: false,
        }],
        breakpoints: vec![entry("ceftriaxone", None, 1.0, Some(2.0), 4.0)],
        drugs: vec![monograph("ceftriaxone")],
        sites: vec![InfectionSite {
            id: "cns".to_string(),
            name: "CNS infection".to_string(),
            penetration: PenetrationClass::CnsCritical,
            bactericidal_required: true,
            dosing_intensity: DosingIntensity::High,
            ineffective_agents: Vec::new(),
            combination_preferred: true,
        }],
        annotations: vec![ClinicalAnnotation {
            organism_id: "escherichia_coli".to_string(),
            antibiotic: "ceftriaxone".to_string(),
            interpretation: Interpretation::R,
            note: "consider ESBL confirmation".to_string(),
        }],
    }
}

#[test]
fn valid_bundle_indexes() {
    let data = ReferenceData::from_bundle(bundle()).expect("valid bundle");
    assert!(data.organism("escherichia_coli").is_some());
    assert!(data.monograph("ceftriaxone").is_some());
    assert!(data.site("cns").is_some());
    assert_eq!(
        data.annotation("escherichia_coli", "ceftriaxone", Interpretation::R),
        Some("consider ESBL confirmation"),
    );
}

#[test]
fn site_specific_breakpoint_wins_and_falls_back() {
    let mut b = bundle();
    b.breakpoints
        .push(entry("ceftriaxone", Some("cns"), 0.5, Some(1.0), 2.0));
    let data = ReferenceData::from_bundle(b).expect("valid bundle");

    let systemic = data
        .breakpoint(OrganismCategory::Enterobacterales, "ceftriaxone", None)
        .expect("systemic row");
    assert_eq!(systemic.resistant, 4.0);

    let meningeal = data
        .breakpoint(OrganismCategory::Enterobacterales, "ceftriaxone", Some("cns"))
        .expect("site row");
    assert_eq!(meningeal.resistant, 2.0);

    // A site with no dedicated row falls back to systemic.
    let fallback = data
        .breakpoint(
            OrganismCategory::Enterobacterales,
            "ceftriaxone",
            Some("urinary_tract"),
        )
        .expect("fallback row");
    assert_eq!(fallback.resistant, 4.0);
}

#[test]
fn non_monotonic_breakpoint_is_rejected() {
    let mut b = bundle();
    b.breakpoints = vec![entry("ceftriaxone", None, 4.0, None, 1.0)];
    assert!(ReferenceData::from_bundle(b).is_err());
}

#[test]
fn intermediate_outside_band_is_rejected() {
    let mut b = bundle();
    b.breakpoints = vec![entry("ceftriaxone", None, 1.0, Some(8.0), 4.0)];
    assert!(ReferenceData::from_bundle(b).is_err());
}

#[test]
fn unknown_intrinsic_drug_is_rejected() {
    let mut b = bundle();
    b.organisms[0].intrinsic_resistance = vec!["made_up_drug".to_string()];
    assert!(ReferenceData::from_bundle(b).is_err());
}

#[test]
fn empty_tables_fail_closed() {
    let mut b = bundle();
    b.breakpoints.clear();
    assert!(ReferenceData::from_bundle(b).is_err());

    let mut b = bundle();
    b.organisms.clear();
    assert!(ReferenceData::from_bundle(b).is_err());
}
