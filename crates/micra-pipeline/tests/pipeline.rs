use std::sync::Arc;

use micra_core::abx;
use micra_core::models::patient::PatientContext;
use micra_core::models::request::{AntibiogramRequest, EntryValue, PanelEntry};
use micra_core::models::susceptibility::{Interpretation, ResultOrigin};
use micra_core::models::therapy::ScoringWeights;
use micra_core::models::warning::WarningCode;
use micra_core::org;
use micra_pipeline::{Pipeline, PipelineConfig};
use micra_refdata::loader::ReferenceLoader;

fn qualitative(antibiotic: &str, interpretation: Interpretation) -> PanelEntry {
    PanelEntry {
        antibiotic: antibiotic.to_string(),
        value: EntryValue::Qualitative(interpretation),
        origin: ResultOrigin::Tested,
    }
}

fn pipeline() -> Pipeline {
    let reference = micra_refdata::reference_data().unwrap();
    Pipeline::new(Arc::new(reference), PipelineConfig::default()).unwrap()
}

fn request(organism_id: &str, entries: Vec<PanelEntry>) -> AntibiogramRequest {
    AntibiogramRequest {
        organism_id: organism_id.to_string(),
        site_id: None,
        entries,
        patient: PatientContext::default(),
    }
}

#[test]
fn invalid_weights_are_rejected_at_construction() {
    let reference = Arc::new(micra_refdata::reference_data().unwrap());
    let config = PipelineConfig {
        weights: ScoringWeights {
            efficacy: 0.9,
            ..ScoringWeights::default()
        },
        ..PipelineConfig::default()
    };

    assert!(Pipeline::new(reference, config).is_err());
}

#[tokio::test]
async fn pipeline_constructs_behind_the_load_boundary() {
    let loader = ReferenceLoader::embedded();
    let pipeline = Pipeline::from_loader(&loader, PipelineConfig::default())
        .await
        .expect("loads and constructs");

    let report = pipeline.analyze(&request(
        org::ESCHERICHIA_COLI,
        vec![qualitative(abx::CEFTRIAXONE, Interpretation::S)],
    ));
    assert!(report.success);
}

#[tokio::test]
async fn malformed_reference_data_fails_closed() {
    let loader = ReferenceLoader::from_json(b"[]".to_vec());
    assert!(
        Pipeline::from_loader(&loader, PipelineConfig::default())
            .await
            .is_err()
    );
}

#[test]
fn unknown_organism_degrades_instead_of_crashing() {
    let report = pipeline().analyze(&request(
        "unknown_bug",
        vec![qualitative(abx::CEFTRIAXONE, Interpretation::S)],
    ));

    assert!(!report.success);
    assert!(report
        .warnings
        .iter()
        .any(|w| w.code == WarningCode::MissingData));
    // Conservative fallback, never an empty strategy list.
    assert!(!report.strategies.is_empty());
    assert!(report.panel.is_empty());
}

#[test]
fn unknown_site_warns_and_uses_systemic_breakpoints() {
    let reference = micra_refdata::reference_data().unwrap();
    let pipeline = Pipeline::new(Arc::new(reference), PipelineConfig::default()).unwrap();

    let report = pipeline.analyze(&AntibiogramRequest {
        organism_id: org::ESCHERICHIA_COLI.to_string(),
        site_id: Some("left_elbow".to_string()),
        entries: vec![qualitative(abx::CEFTRIAXONE, Interpretation::S)],
        patient: PatientContext::default(),
    });

    assert!(report.success);
    assert!(report
        .warnings
        .iter()
        .any(|w| w.code == WarningCode::MissingData));
}

#[test]
fn intrinsically_resistant_entries_are_excluded_with_a_warning() {
    let report = pipeline().analyze(&request(
        org::KLEBSIELLA_PNEUMONIAE,
        vec![
            qualitative(abx::AMPICILLIN, Interpretation::S),
            qualitative(abx::CEFTRIAXONE, Interpretation::S),
        ],
    ));

    assert!(report.success);
    assert!(report.initial_panel.get(abx::AMPICILLIN).is_none());
    assert!(report
        .warnings
        .iter()
        .any(|w| w.code == WarningCode::IntrinsicResistance));
    assert!(report
        .strategies
        .iter()
        .all(|s| !s.agents.contains(&abx::AMPICILLIN.to_string())));
}

#[test]
fn analysis_is_deterministic_across_runs() {
    let p = pipeline();
    let req = request(
        org::ESCHERICHIA_COLI,
        vec![
            qualitative(abx::CEFTRIAXONE, Interpretation::R),
            qualitative(abx::CEFTAZIDIME, Interpretation::R),
            qualitative(abx::MEROPENEM, Interpretation::S),
        ],
    );

    let first = p.analyze(&req);
    let second = p.analyze(&req);

    assert_eq!(first.success, second.success);
    assert_eq!(first.panel.len(), second.panel.len());
    for (a, b) in first.panel.iter().zip(second.panel.iter()) {
        assert_eq!(a.antibiotic, b.antibiotic);
        assert_eq!(a.interpretation, b.interpretation);
    }
    assert_eq!(first.patterns.len(), second.patterns.len());
    assert_eq!(first.strategies.len(), second.strategies.len());
    for (a, b) in first.strategies.iter().zip(second.strategies.iter()) {
        assert_eq!(a.agents, b.agents);
        assert!((a.total_score - b.total_score).abs() < 1e-9);
    }
}

#[test]
fn rerunning_overrides_on_an_overridden_panel_changes_nothing() {
    // End-to-end idempotence: feed the final panel of one analysis back
    // in as qualitative entries; the second run must apply no overrides.
    let p = pipeline();
    let first = p.analyze(&request(
        org::STAPHYLOCOCCUS_AUREUS,
        vec![
            qualitative(abx::CEFOXITIN, Interpretation::R),
            qualitative(abx::OXACILLIN, Interpretation::S),
            qualitative(abx::VANCOMYCIN, Interpretation::S),
        ],
    ));
    assert!(!first.changes.is_empty());

    let fed_back: Vec<PanelEntry> = first
        .panel
        .iter()
        .map(|r| qualitative(&r.antibiotic, r.interpretation))
        .collect();
    let second = p.analyze(&request(org::STAPHYLOCOCCUS_AUREUS, fed_back));

    assert!(second.changes.is_empty());
    for (a, b) in first.panel.iter().zip(second.panel.iter()) {
        assert_eq!(a.interpretation, b.interpretation);
    }
}
