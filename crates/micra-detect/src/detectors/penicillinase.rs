//! Simple penicillinase detection.
//!
//! The narrow phenotype: aminopenicillin (or penicillin) resistance with
//! cephalosporins spared. Deliberately yields to the broader enzymes:
//! once early cephalosporins go resistant this detector stands down and
//! lets ESBL/AmpC detection carry the finding.

use micra_core::abx;
use micra_core::models::pattern::{DetectionConfidence, MechanismType, ResistancePattern};
use micra_core::models::susceptibility::SusceptibilityPanel;
use micra_core::reference::organism::{OrganismCategory, OrganismRecord};

use crate::config::DetectionThresholds;
use crate::guidance;
use crate::Detector;

pub struct Penicillinase;

impl Detector for Penicillinase {
    fn mechanism(&self) -> MechanismType {
        MechanismType::Penicillinase
    }

    fn applies_to(&self, organism: &OrganismRecord) -> bool {
        matches!(
            organism.category,
            OrganismCategory::Enterobacterales | OrganismCategory::Staphylococcus
        )
    }

    fn detect(
        &self,
        organism: &OrganismRecord,
        panel: &SusceptibilityPanel,
        thresholds: &DetectionThresholds,
    ) -> ResistancePattern {
        if organism.category == OrganismCategory::Staphylococcus {
            return detect_staphylococcal(panel);
        }

        let ceph3_r = abx::THIRD_GEN_CEPHALOSPORINS
            .iter()
            .any(|a| panel.is_resistant(a));
        if !panel.is_resistant(abx::AMPICILLIN)
            || panel.is_resistant(abx::CEFAZOLIN)
            || panel.is_resistant(abx::CEFOXITIN)
            || ceph3_r
        {
            return ResistancePattern::not_detected(MechanismType::Penicillinase);
        }

        let mut score: u32 = 2;
        let mut evidence = vec!["ampicillin resistant".to_string()];

        if panel.is_susceptible(abx::CEFAZOLIN) {
            score += 2;
            evidence.push("cefazolin susceptible: enzyme spares cephalosporins".to_string());
        }
        if abx::THIRD_GEN_CEPHALOSPORINS
            .iter()
            .any(|a| panel.is_susceptible(a))
        {
            score += 1;
            evidence.push("third-generation cephalosporins susceptible".to_string());
        }
        if panel.is_susceptible(abx::AMOXICILLIN_CLAVULANATE)
            || panel.is_susceptible(abx::AMPICILLIN_SULBACTAM)
        {
            score += 1;
            evidence.push(
                "beta-lactamase-inhibitor combination restores susceptibility".to_string(),
            );
        }

        let confidence = if score >= thresholds.penicillinase_high {
            DetectionConfidence::High
        } else {
            DetectionConfidence::Moderate
        };

        ResistancePattern {
            mechanism: MechanismType::Penicillinase,
            detected: true,
            confidence,
            evidence,
            clinical_implications: guidance::implications(MechanismType::Penicillinase)
                .iter()
                .map(|s| s.to_string())
                .collect(),
            override_rules: Vec::new(),
        }
    }
}

fn detect_staphylococcal(panel: &SusceptibilityPanel) -> ResistancePattern {
    let oxacillin_ok = !panel.is_resistant(abx::OXACILLIN)
        && !panel.is_resistant(abx::CEFOXITIN)
        && !panel.is_resistant(abx::METHICILLIN);

    if panel.is_resistant(abx::PENICILLIN) && oxacillin_ok {
        ResistancePattern {
            mechanism: MechanismType::Penicillinase,
            detected: true,
            confidence: DetectionConfidence::High,
            evidence: vec![
                "penicillin resistant with oxacillin/cefoxitin spared: staphylococcal penicillinase"
                    .to_string(),
            ],
            clinical_implications: guidance::implications(MechanismType::Penicillinase)
                .iter()
                .map(|s| s.to_string())
                .collect(),
            override_rules: Vec::new(),
        }
    } else {
        ResistancePattern::not_detected(MechanismType::Penicillinase)
    }
}
