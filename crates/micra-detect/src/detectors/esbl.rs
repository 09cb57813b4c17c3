//! Extended-spectrum beta-lactamase detection.
//!
//! Requires resistance to at least two of the three indicator
//! third-generation cephalosporins; carbapenem susceptibility and an
//! inhibitor-restoration effect are supporting evidence. Override rules
//! target third-generation cephalosporins and aztreonam; cefepime is
//! deliberately left alone.

use micra_core::abx;
use micra_core::models::pattern::{DetectionConfidence, MechanismType, ResistancePattern};
use micra_core::models::susceptibility::SusceptibilityPanel;
use micra_core::reference::organism::{OrganismCategory, OrganismRecord};

use crate::config::DetectionThresholds;
use crate::guidance;
use crate::Detector;

const OVERRIDE_REASON: &str =
    "ESBL detected: third-generation cephalosporins and aztreonam are clinically unreliable";

pub struct Esbl;

impl Detector for Esbl {
    fn mechanism(&self) -> MechanismType {
        MechanismType::Esbl
    }

    fn applies_to(&self, organism: &OrganismRecord) -> bool {
        organism.category == OrganismCategory::Enterobacterales
    }

    fn detect(
        &self,
        _organism: &OrganismRecord,
        panel: &SusceptibilityPanel,
        thresholds: &DetectionThresholds,
    ) -> ResistancePattern {
        let resistant_cephs: Vec<&str> = abx::THIRD_GEN_CEPHALOSPORINS
            .iter()
            .copied()
            .filter(|a| panel.is_resistant(a))
            .collect();

        if resistant_cephs.len() < 2 {
            return ResistancePattern::not_detected(MechanismType::Esbl);
        }

        let mut score: u32 = 0;
        let mut evidence = Vec::new();

        score += 2 * resistant_cephs.len() as u32;
        evidence.push(format!(
            "resistant to {} of 3 indicator third-generation cephalosporins ({})",
            resistant_cephs.len(),
            resistant_cephs.join(", "),
        ));

        if panel.is_susceptible(abx::ERTAPENEM) && panel.is_susceptible(abx::MEROPENEM) {
            score += 1;
            evidence.push(
                "ertapenem and meropenem both susceptible, arguing against carbapenemase"
                    .to_string(),
            );
        }

        if inhibitor_restoration(panel) {
            score += 1;
            evidence.push(
                "beta-lactamase-inhibitor combination restores susceptibility where the unprotected agent is resistant"
                    .to_string(),
            );
        }

        let confidence = if score >= thresholds.esbl_high {
            DetectionConfidence::High
        } else if score >= thresholds.esbl_moderate {
            DetectionConfidence::Moderate
        } else {
            DetectionConfidence::Low
        };

        ResistancePattern {
            mechanism: MechanismType::Esbl,
            detected: true,
            confidence,
            evidence,
            clinical_implications: guidance::implications(MechanismType::Esbl)
                .iter()
                .map(|s| s.to_string())
                .collect(),
            override_rules: guidance::force_resistant(
                &[
                    abx::CEFTRIAXONE,
                    abx::CEFOTAXIME,
                    abx::CEFTAZIDIME,
                    abx::CEFUROXIME,
                    abx::AZTREONAM,
                ],
                OVERRIDE_REASON,
            ),
        }
    }
}

/// An inhibitor-protected agent susceptible while its unprotected
/// counterpart (or an indicator cephalosporin) is resistant.
fn inhibitor_restoration(panel: &SusceptibilityPanel) -> bool {
    let amp_restored = panel.is_resistant(abx::AMPICILLIN)
        && (panel.is_susceptible(abx::AMOXICILLIN_CLAVULANATE)
            || panel.is_susceptible(abx::AMPICILLIN_SULBACTAM));

    let ceph_resistant = abx::THIRD_GEN_CEPHALOSPORINS
        .iter()
        .any(|a| panel.is_resistant(a));
    let piptazo_restored = ceph_resistant && panel.is_susceptible(abx::PIPERACILLIN_TAZOBACTAM);

    amp_restored || piptazo_restored
}
