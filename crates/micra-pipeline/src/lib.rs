//! micra-pipeline
//!
//! The orchestrating entry point: interpret the raw panel, run the
//! detector registry and the stepwise reasoning module, reconcile them,
//! apply overrides, flag synergies, and rank therapies.
//!
//! All computation is synchronous and stateless per invocation; the only
//! asynchronous operation is the one-time reference-data load completed
//! before the pipeline accepts requests. An internal failure never
//! escapes as a panic: the caller always receives a report, degraded
//! with `success: false` when something went wrong, because partial or
//! garbled output is worse than an explicit failure notice in a clinical
//! tool.

pub mod error;

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use micra_core::models::analysis::AnalysisReport;
use micra_core::models::pattern::{MechanismType, ResistancePattern};
use micra_core::models::request::{AntibiogramRequest, EntryValue};
use micra_core::models::sequential::SequentialFinding;
use micra_core::models::susceptibility::SusceptibilityPanel;
use micra_core::models::therapy::ScoringWeights;
use micra_core::models::warning::{Warning, WarningCode};
use micra_core::reference::ReferenceData;
use micra_detect::config::DetectionThresholds;
use micra_detect::{overrides, sequential, synergy};
use micra_interpret::interpret;
use micra_refdata::loader::ReferenceLoader;
use micra_therapy::{mdr, TherapyInput};

use crate::error::PipelineError;

/// Tunable heuristics: scoring weights and detection thresholds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub weights: ScoringWeights,
    pub thresholds: DetectionThresholds,
}

/// The analysis pipeline. Holds the immutable reference bundle; carries
/// no per-request state, so one instance serves concurrent analyses.
pub struct Pipeline {
    reference: Arc<ReferenceData>,
    config: PipelineConfig,
}

impl Pipeline {
    /// Construct from already-loaded reference data. Rejects weight sets
    /// that do not sum to 1.0.
    pub fn new(
        reference: Arc<ReferenceData>,
        config: PipelineConfig,
    ) -> Result<Self, PipelineError> {
        config.weights.validate()?;
        Ok(Self { reference, config })
    }

    /// Construct behind the one-time load boundary. A failed load
    /// propagates; the pipeline never runs on partial tables.
    pub async fn from_loader(
        loader: &ReferenceLoader,
        config: PipelineConfig,
    ) -> Result<Self, PipelineError> {
        let reference = loader.get_or_load().await?;
        Self::new(reference, config)
    }

    /// Analyze one antibiogram. Never panics.
    pub fn analyze(&self, request: &AntibiogramRequest) -> AnalysisReport {
        match catch_unwind(AssertUnwindSafe(|| self.run(request))) {
            Ok(report) => report,
            Err(_) => {
                error!(
                    organism_id = %request.organism_id,
                    "analysis failed unexpectedly; returning degraded report"
                );
                self.degraded(
                    request,
                    vec![Warning::new(
                        WarningCode::InternalError,
                        "analysis failed unexpectedly; consult a specialist manually",
                    )],
                )
            }
        }
    }

    fn run(&self, request: &AntibiogramRequest) -> AnalysisReport {
        let reference: &ReferenceData = &self.reference;
        let mut warnings = Vec::new();

        let Some(organism) = reference.organism(&request.organism_id) else {
            warnings.push(Warning::new(
                WarningCode::MissingData,
                format!("unknown organism '{}'", request.organism_id),
            ));
            return self.degraded(request, warnings);
        };

        let mut site = None;
        if let Some(site_id) = request.site_id.as_deref() {
            site = reference.site(site_id);
            if site.is_none() {
                warnings.push(Warning::new(
                    WarningCode::MissingData,
                    format!("unknown infection site '{site_id}'; systemic breakpoints used"),
                ));
            }
        }

        let mut results = Vec::new();
        for entry in &request.entries {
            if organism.is_intrinsically_resistant(&entry.antibiotic) {
                warnings.push(Warning::new(
                    WarningCode::IntrinsicResistance,
                    format!(
                        "{} is intrinsically resistant to {}; entry excluded from the panel",
                        organism.name, entry.antibiotic
                    ),
                ));
                continue;
            }
            match &entry.value {
                EntryValue::Mic(raw) => {
                    let interpreted = interpret::interpret_mic(
                        reference,
                        organism,
                        &entry.antibiotic,
                        raw,
                        site,
                    );
                    warnings.extend(interpreted.warnings);
                    results.push(interpreted.result);
                }
                EntryValue::Qualitative(interpretation) => {
                    results.push(interpret::qualitative(
                        reference,
                        organism,
                        &entry.antibiotic,
                        *interpretation,
                        entry.origin,
                    ));
                }
            }
        }
        let initial_panel = SusceptibilityPanel::new(results);

        let detected: Vec<ResistancePattern> =
            micra_detect::detect_all(organism, &initial_panel, &self.config.thresholds)
                .into_iter()
                .filter(|p| p.detected)
                .collect();

        let sequential = sequential::analyze(organism, &initial_panel);
        if let Some(finding) = &sequential
            && let Some(warning) = reconcile(finding, &detected)
        {
            warnings.push(warning);
        }

        let outcome = overrides::apply_overrides(&initial_panel, &detected);
        let synergies = synergy::detect_synergies(&outcome.panel, &detected);

        let therapy = micra_therapy::rank_strategies(&TherapyInput {
            reference,
            organism,
            site,
            panel: &outcome.panel,
            patterns: &detected,
            patient: &request.patient,
            weights: &self.config.weights,
        });

        info!(
            organism_id = %request.organism_id,
            n_results = outcome.panel.len(),
            n_patterns = detected.len(),
            n_overrides = outcome.changes.len(),
            n_strategies = therapy.strategies.len(),
            mdr = therapy.mdr_detected,
            "analysis complete"
        );

        AnalysisReport {
            id: Uuid::new_v4(),
            success: true,
            organism_id: request.organism_id.clone(),
            site_id: request.site_id.clone(),
            initial_panel,
            panel: outcome.panel,
            patterns: detected,
            sequential,
            changes: outcome.changes,
            synergies,
            strategies: therapy.strategies,
            warnings,
            mdr_detected: therapy.mdr_detected,
            analyzed_at: jiff::Timestamp::now(),
        }
    }

    /// A conservative failure report: no interpretations, the fixed
    /// consultation strategy set, and `success: false`.
    fn degraded(&self, request: &AntibiogramRequest, warnings: Vec<Warning>) -> AnalysisReport {
        AnalysisReport {
            id: Uuid::new_v4(),
            success: false,
            organism_id: request.organism_id.clone(),
            site_id: request.site_id.clone(),
            initial_panel: SusceptibilityPanel::new(Vec::new()),
            panel: SusceptibilityPanel::new(Vec::new()),
            patterns: Vec::new(),
            sequential: None,
            changes: Vec::new(),
            synergies: Vec::new(),
            strategies: mdr::consultation_strategies(&self.config.weights),
            warnings,
            mdr_detected: false,
            analyzed_at: jiff::Timestamp::now(),
        }
    }
}

/// The documented reconciliation policy: the detector registry is
/// authoritative for detection, confidence, and overrides; the stepwise
/// finding is an independent narrative. A definitive stepwise mechanism
/// the registry did not confirm is surfaced as a visible warning, never
/// silently merged.
fn reconcile(finding: &SequentialFinding, detected: &[ResistancePattern]) -> Option<Warning> {
    let mechanism = finding.mechanism?;

    let registry_agrees = detected.iter().any(|p| {
        p.mechanism == mechanism
            || (mechanism == MechanismType::Carbapenemase && p.mechanism.is_carbapenemase_subtype())
    });

    if registry_agrees {
        None
    } else {
        Some(Warning::new(
            WarningCode::Reconciliation,
            format!(
                "stepwise reasoning concluded {} but the detector registry did not confirm it; review both lines of evidence",
                mechanism.label()
            ),
        ))
    }
}
