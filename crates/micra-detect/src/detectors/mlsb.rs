//! MLSb (macrolide-lincosamide-streptogramin B) resistance detection.
//!
//! Constitutive: erythromycin and clindamycin both resistant.
//! Inducible: erythromycin resistant with clindamycin still testing
//! susceptible; clindamycin is overridden to resistant pending a
//! confirmatory D-test, since induction on therapy is a real failure
//! mode.

use micra_core::abx;
use micra_core::models::pattern::{DetectionConfidence, MechanismType, ResistancePattern};
use micra_core::models::susceptibility::SusceptibilityPanel;
use micra_core::reference::organism::OrganismRecord;

use crate::config::DetectionThresholds;
use crate::guidance;
use crate::Detector;

const INDUCIBLE_REASON: &str =
    "inducible MLSb suspected: clindamycin may fail on therapy; confirm with a D-test";

pub struct Mlsb;

impl Detector for Mlsb {
    fn mechanism(&self) -> MechanismType {
        MechanismType::Mlsb
    }

    fn applies_to(&self, organism: &OrganismRecord) -> bool {
        organism.is_gram_positive()
    }

    fn detect(
        &self,
        _organism: &OrganismRecord,
        panel: &SusceptibilityPanel,
        _thresholds: &DetectionThresholds,
    ) -> ResistancePattern {
        if !panel.is_resistant(abx::ERYTHROMYCIN) {
            return ResistancePattern::not_detected(MechanismType::Mlsb);
        }

        if panel.is_resistant(abx::CLINDAMYCIN) {
            return ResistancePattern {
                mechanism: MechanismType::Mlsb,
                detected: true,
                confidence: DetectionConfidence::High,
                evidence: vec![
                    "erythromycin and clindamycin both resistant: constitutive MLSb"
                        .to_string(),
                ],
                clinical_implications: guidance::implications(MechanismType::Mlsb)
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                override_rules: Vec::new(),
            };
        }

        if panel.is_susceptible(abx::CLINDAMYCIN) {
            return ResistancePattern {
                mechanism: MechanismType::Mlsb,
                detected: true,
                confidence: DetectionConfidence::Moderate,
                evidence: vec![
                    "erythromycin resistant with clindamycin susceptible: inducible MLSb pattern, confirmatory induction (D-) test required"
                        .to_string(),
                ],
                clinical_implications: guidance::implications(MechanismType::Mlsb)
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                override_rules: guidance::force_resistant(
                    &[abx::CLINDAMYCIN],
                    INDUCIBLE_REASON,
                ),
            };
        }

        // Erythromycin resistant but clindamycin untested: macrolide
        // resistance alone does not establish MLSb.
        ResistancePattern::not_detected(MechanismType::Mlsb)
    }
}
