//! Aminoglycoside class-resistance detection.
//!
//! Modifying enzymes are substrate-specific, so a single resistant
//! member is not evidence of class resistance and yields no detection.
//! No overrides are attached even on detection, since agents still testing
//! susceptible (amikacin in particular) often retain activity.

use micra_core::abx;
use micra_core::models::pattern::{DetectionConfidence, MechanismType, ResistancePattern};
use micra_core::models::susceptibility::SusceptibilityPanel;
use micra_core::reference::organism::OrganismRecord;

use crate::config::DetectionThresholds;
use crate::guidance;
use crate::Detector;

pub struct AminoglycosideClass;

impl Detector for AminoglycosideClass {
    fn mechanism(&self) -> MechanismType {
        MechanismType::AminoglycosideResistance
    }

    fn applies_to(&self, _organism: &OrganismRecord) -> bool {
        true
    }

    fn detect(
        &self,
        _organism: &OrganismRecord,
        panel: &SusceptibilityPanel,
        thresholds: &DetectionThresholds,
    ) -> ResistancePattern {
        let resistant: Vec<&str> = abx::AMINOGLYCOSIDES
            .iter()
            .copied()
            .filter(|a| panel.is_resistant(a))
            .collect();

        if resistant.len() < thresholds.class_moderate_count {
            return ResistancePattern::not_detected(MechanismType::AminoglycosideResistance);
        }

        let confidence = if resistant.len() >= thresholds.class_high_count {
            DetectionConfidence::High
        } else {
            DetectionConfidence::Moderate
        };

        ResistancePattern {
            mechanism: MechanismType::AminoglycosideResistance,
            detected: true,
            confidence,
            evidence: vec![format!(
                "{} of 3 aminoglycoside class members resistant ({})",
                resistant.len(),
                resistant.join(", "),
            )],
            clinical_implications: guidance::implications(
                MechanismType::AminoglycosideResistance,
            )
            .iter()
            .map(|s| s.to_string())
            .collect(),
            override_rules: Vec::new(),
        }
    }
}
