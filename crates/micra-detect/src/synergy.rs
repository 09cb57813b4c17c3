//! Cross-mechanism synergy flags. Informational only; these never
//! trigger further overrides.

use micra_core::abx;
use micra_core::models::overrides::{SynergyFlag, SynergyKind};
use micra_core::models::pattern::{DetectionConfidence, MechanismType, ResistancePattern};
use micra_core::models::susceptibility::SusceptibilityPanel;

pub fn detect_synergies(
    panel: &SusceptibilityPanel,
    patterns: &[ResistancePattern],
) -> Vec<SynergyFlag> {
    let mut flags = Vec::new();

    let detected = |m: MechanismType| patterns.iter().any(|p| p.detected && p.mechanism == m);

    // (a) Weak OXA-48-like carbapenemase plus a reduced-permeability
    // signature, with no stronger carbapenemase evidence.
    let stronger_evidence = patterns.iter().any(|p| {
        p.detected
            && (matches!(p.mechanism, MechanismType::Kpc | MechanismType::Mbl)
                || (p.mechanism == MechanismType::Carbapenemase
                    && p.confidence == DetectionConfidence::High))
    });
    if detected(MechanismType::OxaCarbapenemase)
        && !stronger_evidence
        && panel.count_nonsusceptible(abx::CARBAPENEMS) >= 1
    {
        flags.push(SynergyFlag {
            kind: SynergyKind::PorinLossPotentiation,
            description: "Weak OXA-48-like carbapenemase with reduced carbapenem susceptibility and no stronger carbapenemase evidence; porin loss likely potentiates the enzyme.".to_string(),
        });
    }

    // (b) ESBL co-occurring with resistance across unrelated classes.
    if detected(MechanismType::Esbl) {
        let mut resistant_classes = 0;
        if panel.count_resistant(abx::BETA_LACTAMS) >= 1 {
            resistant_classes += 1;
        }
        if panel.count_resistant(abx::FLUOROQUINOLONES) >= 1 {
            resistant_classes += 1;
        }
        if panel.count_resistant(abx::AMINOGLYCOSIDES) >= 1 {
            resistant_classes += 1;
        }
        if resistant_classes >= 2 {
            flags.push(SynergyFlag {
                kind: SynergyKind::EffluxMultiClass,
                description: "ESBL co-occurring with resistance across multiple antibiotic classes; an efflux-enhanced phenotype is likely.".to_string(),
            });
        }
    }

    flags
}
