//! Vancomycin-resistant Enterococcus detection.
//!
//! Vancomycin resistance is required. Teicoplanin splits the phenotype:
//! co-resistance is vanA-like (high confidence), spared teicoplanin is
//! vanB-like (moderate). An untested teicoplanin leaves the split open.

use micra_core::abx;
use micra_core::models::pattern::{DetectionConfidence, MechanismType, ResistancePattern};
use micra_core::models::susceptibility::{Interpretation, SusceptibilityPanel};
use micra_core::reference::organism::{OrganismCategory, OrganismRecord};

use crate::config::DetectionThresholds;
use crate::guidance;
use crate::Detector;

pub struct Vre;

impl Detector for Vre {
    fn mechanism(&self) -> MechanismType {
        MechanismType::Vre
    }

    fn applies_to(&self, organism: &OrganismRecord) -> bool {
        organism.category == OrganismCategory::Enterococcus
    }

    fn detect(
        &self,
        _organism: &OrganismRecord,
        panel: &SusceptibilityPanel,
        _thresholds: &DetectionThresholds,
    ) -> ResistancePattern {
        if !panel.is_resistant(abx::VANCOMYCIN) {
            return ResistancePattern::not_detected(MechanismType::Vre);
        }

        let mut evidence = vec!["vancomycin resistant".to_string()];

        let confidence = match panel.interpretation_of(abx::TEICOPLANIN) {
            Some(Interpretation::R) => {
                evidence.push(
                    "teicoplanin also resistant: vanA-like phenotype".to_string(),
                );
                DetectionConfidence::High
            }
            Some(Interpretation::S) => {
                evidence.push(
                    "teicoplanin susceptible: vanB-like phenotype; teicoplanin resistance can emerge on therapy"
                        .to_string(),
                );
                DetectionConfidence::Moderate
            }
            _ => {
                evidence.push(
                    "teicoplanin not tested; vanB-like phenotype cannot be excluded"
                        .to_string(),
                );
                DetectionConfidence::Moderate
            }
        };

        ResistancePattern {
            mechanism: MechanismType::Vre,
            detected: true,
            confidence,
            evidence,
            clinical_implications: guidance::implications(MechanismType::Vre)
                .iter()
                .map(|s| s.to_string())
                .collect(),
            override_rules: Vec::new(),
        }
    }
}
