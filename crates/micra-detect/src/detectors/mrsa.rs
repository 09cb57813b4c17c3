//! Methicillin-resistant S. aureus detection.
//!
//! First match wins: the cefoxitin screen (the preferred surrogate)
//! outranks direct oxacillin testing, which outranks historic
//! methicillin testing. Indicators do not stack.

use micra_core::abx;
use micra_core::models::pattern::{DetectionConfidence, MechanismType, ResistancePattern};
use micra_core::models::susceptibility::SusceptibilityPanel;
use micra_core::org;
use micra_core::reference::organism::OrganismRecord;

use crate::config::DetectionThresholds;
use crate::guidance;
use crate::Detector;

const OVERRIDE_REASON: &str =
    "MRSA detected: all beta-lactams are clinically inactive regardless of in-vitro result";

pub struct Mrsa;

impl Detector for Mrsa {
    fn mechanism(&self) -> MechanismType {
        MechanismType::Mrsa
    }

    fn applies_to(&self, organism: &OrganismRecord) -> bool {
        organism.id == org::STAPHYLOCOCCUS_AUREUS
    }

    fn detect(
        &self,
        _organism: &OrganismRecord,
        panel: &SusceptibilityPanel,
        _thresholds: &DetectionThresholds,
    ) -> ResistancePattern {
        let (confidence, evidence) = if panel.is_resistant(abx::CEFOXITIN) {
            (
                DetectionConfidence::High,
                "cefoxitin screen positive (preferred mecA surrogate)",
            )
        } else if panel.is_resistant(abx::OXACILLIN) {
            (DetectionConfidence::Moderate, "oxacillin resistant")
        } else if panel.is_resistant(abx::METHICILLIN) {
            (DetectionConfidence::Moderate, "methicillin resistant")
        } else {
            return ResistancePattern::not_detected(MechanismType::Mrsa);
        };

        ResistancePattern {
            mechanism: MechanismType::Mrsa,
            detected: true,
            confidence,
            evidence: vec![evidence.to_string()],
            clinical_implications: guidance::implications(MechanismType::Mrsa)
                .iter()
                .map(|s| s.to_string())
                .collect(),
            override_rules: guidance::force_resistant(abx::BETA_LACTAMS, OVERRIDE_REASON),
        }
    }
}
