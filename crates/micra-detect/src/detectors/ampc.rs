//! AmpC beta-lactamase detection.
//!
//! Cefoxitin resistance is the defining screening indicator. Species
//! with a chromosomally inducible enzyme carry cefoxitin as intrinsic
//! resistance and never present it on the panel, so a derepression
//! pattern (inducible species with third-generation cephalosporin
//! resistance) is an alternative gate.

use micra_core::abx;
use micra_core::models::pattern::{DetectionConfidence, MechanismType, ResistancePattern};
use micra_core::models::susceptibility::SusceptibilityPanel;
use micra_core::org;
use micra_core::reference::organism::{OrganismCategory, OrganismRecord};

use crate::config::DetectionThresholds;
use crate::guidance;
use crate::Detector;

const OVERRIDE_REASON: &str =
    "AmpC detected: cephalosporins through third generation and inhibitor combinations are clinically unreliable";

pub struct Ampc;

impl Detector for Ampc {
    fn mechanism(&self) -> MechanismType {
        MechanismType::Ampc
    }

    fn applies_to(&self, organism: &OrganismRecord) -> bool {
        organism.category == OrganismCategory::Enterobacterales
            && (organism.ampc_inducible
                || org::AMPC_SPECIES.contains(&organism.id.as_str()))
    }

    fn detect(
        &self,
        organism: &OrganismRecord,
        panel: &SusceptibilityPanel,
        thresholds: &DetectionThresholds,
    ) -> ResistancePattern {
        let cefoxitin_r = panel.is_resistant(abx::CEFOXITIN);
        let ceph3_r = abx::THIRD_GEN_CEPHALOSPORINS
            .iter()
            .any(|a| panel.is_resistant(a));
        let derepression = organism.ampc_inducible && ceph3_r;

        if !cefoxitin_r && !derepression {
            return ResistancePattern::not_detected(MechanismType::Ampc);
        }

        let mut score: u32 = 0;
        let mut evidence = Vec::new();

        if cefoxitin_r {
            score += 2;
            evidence.push("cefoxitin resistant (defining AmpC screen)".to_string());
        }
        if derepression {
            score += 2;
            evidence.push(format!(
                "{} carries an inducible chromosomal AmpC and shows third-generation cephalosporin resistance (derepression pattern)",
                organism.name,
            ));
        }
        if panel.is_resistant(abx::CEFAZOLIN) {
            score += 2;
            evidence.push("cefazolin resistant".to_string());
        }
        if no_inhibitor_restoration(panel) {
            score += 1;
            evidence.push(
                "beta-lactamase-inhibitor combination does not restore susceptibility"
                    .to_string(),
            );
        }
        if panel.is_susceptible(abx::MEROPENEM) {
            score += 1;
            evidence.push("meropenem susceptible".to_string());
        }

        let confidence = if score >= thresholds.ampc_high {
            DetectionConfidence::High
        } else if score >= thresholds.ampc_moderate {
            DetectionConfidence::Moderate
        } else {
            DetectionConfidence::Low
        };

        ResistancePattern {
            mechanism: MechanismType::Ampc,
            detected: true,
            confidence,
            evidence,
            clinical_implications: guidance::implications(MechanismType::Ampc)
                .iter()
                .map(|s| s.to_string())
                .collect(),
            override_rules: guidance::force_resistant(
                &[
                    abx::CEFAZOLIN,
                    abx::CEFUROXIME,
                    abx::CEFTRIAXONE,
                    abx::CEFOTAXIME,
                    abx::CEFTAZIDIME,
                    abx::AMOXICILLIN_CLAVULANATE,
                    abx::AMPICILLIN_SULBACTAM,
                    abx::PIPERACILLIN_TAZOBACTAM,
                ],
                OVERRIDE_REASON,
            ),
        }
    }
}

/// True when an inhibitor combination was tested and stayed resistant;
/// AmpC is not clavulanate-inhibited, so lack of restoration supports it.
fn no_inhibitor_restoration(panel: &SusceptibilityPanel) -> bool {
    abx::INHIBITOR_COMBINATIONS
        .iter()
        .any(|a| panel.is_resistant(a))
}
