//! Fluoroquinolone class-resistance detection.
//!
//! Target-mutation resistance is stepwise and class-wide: two or more
//! resistant members compromise the whole class. A single resistant
//! member is a first-step mutant, reported at moderate confidence but
//! without class-wide overrides.

use micra_core::abx;
use micra_core::models::pattern::{DetectionConfidence, MechanismType, ResistancePattern};
use micra_core::models::susceptibility::SusceptibilityPanel;
use micra_core::reference::organism::OrganismRecord;

use crate::config::DetectionThresholds;
use crate::guidance;
use crate::Detector;

const OVERRIDE_REASON: &str =
    "fluoroquinolone class resistance: remaining class members are clinically unreliable";

pub struct FluoroquinoloneClass;

impl Detector for FluoroquinoloneClass {
    fn mechanism(&self) -> MechanismType {
        MechanismType::FluoroquinoloneResistance
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
        let resistant: Vec<&str> = abx::FLUOROQUINOLONES
            .iter()
            .copied()
            .filter(|a| panel.is_resistant(a))
            .collect();

        if resistant.is_empty() {
            return ResistancePattern::not_detected(MechanismType::FluoroquinoloneResistance);
        }

        let mut evidence = vec![format!(
            "{} of 3 fluoroquinolone class members resistant ({})",
            resistant.len(),
            resistant.join(", "),
        )];

        let (confidence, override_rules) = if resistant.len() >= thresholds.class_high_count {
            (
                DetectionConfidence::High,
                guidance::force_resistant(abx::FLUOROQUINOLONES, OVERRIDE_REASON),
            )
        } else if resistant.len() >= thresholds.class_moderate_count {
            (
                DetectionConfidence::Moderate,
                guidance::force_resistant(abx::FLUOROQUINOLONES, OVERRIDE_REASON),
            )
        } else {
            evidence.push(
                "single-agent resistance suggests a first-step target mutation; class failure risk is elevated"
                    .to_string(),
            );
            (DetectionConfidence::Moderate, Vec::new())
        };

        ResistancePattern {
            mechanism: MechanismType::FluoroquinoloneResistance,
            detected: true,
            confidence,
            evidence,
            clinical_implications: guidance::implications(
                MechanismType::FluoroquinoloneResistance,
            )
            .iter()
            .map(|s| s.to_string())
            .collect(),
            override_rules,
        }
    }
}
