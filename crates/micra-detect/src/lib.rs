//! micra-detect
//!
//! Phenotypic resistance-mechanism detection. Pure rule data and
//! computation — no I/O.
//!
//! Each mechanism has one detector implementing [`Detector`]; the
//! registry is iterated uniformly, so adding or removing a mechanism
//! never touches orchestration code. Detectors are independent of one
//! another's runtime output and never fail: a missing antibiotic simply
//! means the corresponding indicator does not fire, and an organism
//! outside a detector's scope yields a not-detected verdict with
//! `uncertain` confidence, a normal outcome rather than an error.

pub mod config;
pub mod detectors;
pub mod guidance;
pub mod overrides;
pub mod sequential;
pub mod synergy;

use micra_core::models::pattern::{MechanismType, ResistancePattern};
use micra_core::models::susceptibility::SusceptibilityPanel;
use micra_core::reference::organism::OrganismRecord;

use config::DetectionThresholds;

/// Trait implemented by each phenotype detector.
pub trait Detector: Send + Sync {
    /// The mechanism this detector reports on.
    fn mechanism(&self) -> MechanismType;

    /// Whether the organism is within this detector's scope.
    fn applies_to(&self, organism: &OrganismRecord) -> bool;

    /// Examine the full panel and produce a verdict with evidence.
    fn detect(
        &self,
        organism: &OrganismRecord,
        panel: &SusceptibilityPanel,
        thresholds: &DetectionThresholds,
    ) -> ResistancePattern;
}

/// Return all registered detectors.
pub fn all_detectors() -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(detectors::penicillinase::Penicillinase),
        Box::new(detectors::esbl::Esbl),
        Box::new(detectors::ampc::Ampc),
        Box::new(detectors::carbapenemase::Carbapenemase),
        Box::new(detectors::mrsa::Mrsa),
        Box::new(detectors::vre::Vre),
        Box::new(detectors::mlsb::Mlsb),
        Box::new(detectors::fluoroquinolone::FluoroquinoloneClass),
        Box::new(detectors::aminoglycoside::AminoglycosideClass),
    ]
}

/// Run the whole registry against one antibiogram.
///
/// Carbapenemase subtype patterns (KPC, MBL, OXA-48-like) are appended
/// only when the parent carbapenemase pattern was detected; phenotypic
/// subtyping is never reported on its own.
pub fn detect_all(
    organism: &OrganismRecord,
    panel: &SusceptibilityPanel,
    thresholds: &DetectionThresholds,
) -> Vec<ResistancePattern> {
    let mut patterns: Vec<ResistancePattern> = all_detectors()
        .iter()
        .map(|d| {
            if d.applies_to(organism) {
                d.detect(organism, panel, thresholds)
            } else {
                ResistancePattern::not_detected(d.mechanism())
            }
        })
        .collect();

    if let Some(parent) = patterns
        .iter()
        .find(|p| p.mechanism == MechanismType::Carbapenemase && p.detected)
    {
        let subtypes = detectors::carbapenemase::subtype_patterns(panel, parent);
        patterns.extend(subtypes);
    }

    patterns
}
