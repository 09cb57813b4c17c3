//! Carbapenemase detection and phenotypic subtyping.
//!
//! Detection is count-based over the four tracked carbapenems. A single
//! resistant carbapenem yields only low confidence with an explicit
//! caveat, since isolated ertapenem nonsusceptibility has well-known
//! alternative explanations. Subtype patterns (KPC, MBL, OXA-48-like)
//! are heuristic, capped at moderate confidence, and only reported
//! alongside a detected parent pattern.

use micra_core::abx;
use micra_core::models::pattern::{DetectionConfidence, MechanismType, ResistancePattern};
use micra_core::models::susceptibility::{Interpretation, SusceptibilityPanel};
use micra_core::reference::organism::OrganismRecord;

use crate::config::DetectionThresholds;
use crate::guidance;
use crate::Detector;

const OVERRIDE_REASON: &str =
    "carbapenemase detected: intermediate carbapenem results should be treated as resistant";

pub struct Carbapenemase;

impl Detector for Carbapenemase {
    fn mechanism(&self) -> MechanismType {
        MechanismType::Carbapenemase
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
        let resistant: Vec<&str> = abx::CARBAPENEMS
            .iter()
            .copied()
            .filter(|a| panel.is_resistant(a))
            .collect();

        if resistant.is_empty() {
            return ResistancePattern::not_detected(MechanismType::Carbapenemase);
        }

        let mut evidence = vec![format!(
            "{} of 4 tracked carbapenems resistant ({})",
            resistant.len(),
            resistant.join(", "),
        )];

        let confidence = if resistant.len() >= thresholds.carbapenemase_high_count {
            DetectionConfidence::High
        } else if resistant.len() >= thresholds.carbapenemase_moderate_count {
            DetectionConfidence::Moderate
        } else {
            evidence.push(
                "only one carbapenem resistant; consider alternative explanations such as ESBL or AmpC with porin loss, or isolated ertapenem nonsusceptibility"
                    .to_string(),
            );
            DetectionConfidence::Low
        };

        // Low-confidence detection carries no overrides: a lone resistant
        // carbapenem is not enough to reinterpret the others.
        let override_rules = if confidence >= DetectionConfidence::Moderate {
            guidance::intermediate_to_resistant(abx::CARBAPENEMS, OVERRIDE_REASON)
        } else {
            Vec::new()
        };

        ResistancePattern {
            mechanism: MechanismType::Carbapenemase,
            detected: true,
            confidence,
            evidence,
            clinical_implications: guidance::implications(MechanismType::Carbapenemase)
                .iter()
                .map(|s| s.to_string())
                .collect(),
            override_rules,
        }
    }
}

/// Heuristic subtype patterns, emitted only alongside a detected parent.
pub fn subtype_patterns(
    panel: &SusceptibilityPanel,
    parent: &ResistancePattern,
) -> Vec<ResistancePattern> {
    let mut out = Vec::new();

    let carbapenems_r = panel.count_resistant(abx::CARBAPENEMS);
    let aztreonam_s = panel.is_susceptible(abx::AZTREONAM);
    let aztreonam_r = panel.is_resistant(abx::AZTREONAM);
    let ceph3_all_s = abx::THIRD_GEN_CEPHALOSPORINS
        .iter()
        .all(|a| !panel.is_resistant(a))
        && abx::THIRD_GEN_CEPHALOSPORINS
            .iter()
            .any(|a| panel.is_susceptible(a));

    if carbapenems_r >= 2 && aztreonam_s {
        out.push(subtype(
            MechanismType::Mbl,
            vec![
                "multiple carbapenems hydrolyzed while aztreonam is spared, the classic metallo-beta-lactamase signature"
                    .to_string(),
            ],
        ));
    } else if carbapenems_r >= 2 && aztreonam_r && !ceph3_all_s {
        out.push(subtype(
            MechanismType::Kpc,
            vec![
                "broad hydrolysis across carbapenems, aztreonam, and cephalosporins is most consistent with a KPC-type enzyme"
                    .to_string(),
            ],
        ));
    } else if ertapenem_dominant(panel) && ceph3_all_s {
        out.push(subtype(
            MechanismType::OxaCarbapenemase,
            vec![
                "ertapenem-dominant nonsusceptibility with spared third-generation cephalosporins suggests an OXA-48-like enzyme"
                    .to_string(),
            ],
        ));
    }

    // Subtype confidence never exceeds the parent's.
    for p in &mut out {
        p.confidence = p.confidence.min(parent.confidence);
    }

    out
}

fn ertapenem_dominant(panel: &SusceptibilityPanel) -> bool {
    let erta_nonsusceptible = matches!(
        panel.interpretation_of(abx::ERTAPENEM),
        Some(Interpretation::R) | Some(Interpretation::I)
    );
    let others_spared = [abx::MEROPENEM, abx::IMIPENEM, abx::DORIPENEM]
        .iter()
        .all(|a| !panel.is_resistant(a));
    erta_nonsusceptible && others_spared
}

fn subtype(mechanism: MechanismType, evidence: Vec<String>) -> ResistancePattern {
    ResistancePattern {
        mechanism,
        detected: true,
        confidence: DetectionConfidence::Moderate,
        evidence,
        clinical_implications: guidance::implications(mechanism)
            .iter()
            .map(|s| s.to_string())
            .collect(),
        override_rules: Vec::new(),
    }
}
