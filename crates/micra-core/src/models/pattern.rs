use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::overrides::OverrideRule;

/// Resistance mechanism identified from the phenotype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MechanismType {
    Penicillinase,
    Esbl,
    Ampc,
    Carbapenemase,
    Kpc,
    Mbl,
    OxaCarbapenemase,
    Mrsa,
    Vre,
    Mlsb,
    FluoroquinoloneResistance,
    AminoglycosideResistance,
}

impl MechanismType {
    /// Human-readable label for evidence and narrative text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Penicillinase => "penicillinase",
            Self::Esbl => "ESBL",
            Self::Ampc => "AmpC",
            Self::Carbapenemase => "carbapenemase",
            Self::Kpc => "KPC-type carbapenemase",
            Self::Mbl => "metallo-beta-lactamase",
            Self::OxaCarbapenemase => "OXA-48-like carbapenemase",
            Self::Mrsa => "MRSA",
            Self::Vre => "VRE",
            Self::Mlsb => "MLSb",
            Self::FluoroquinoloneResistance => "fluoroquinolone resistance",
            Self::AminoglycosideResistance => "aminoglycoside resistance",
        }
    }

    /// Carbapenemase subtypes are only ever reported alongside their
    /// parent carbapenemase pattern.
    pub fn is_carbapenemase_subtype(&self) -> bool {
        matches!(self, Self::Kpc | Self::Mbl | Self::OxaCarbapenemase)
    }
}

/// Ordinal detection certainty. Not a probability; assigned by each
/// detector's own point thresholds. `Uncertain` never coexists with a
/// positive detection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DetectionConfidence {
    Uncertain,
    Low,
    Moderate,
    High,
}

/// One detector's verdict for one mechanism on one antibiogram.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResistancePattern {
    pub mechanism: MechanismType,
    pub detected: bool,
    pub confidence: DetectionConfidence,
    /// Which indicators fired, in plain language, for audit and teaching.
    pub evidence: Vec<String>,
    pub clinical_implications: Vec<String>,
    pub override_rules: Vec<OverrideRule>,
}

impl ResistancePattern {
    /// The normal outcome when an organism is out of scope for a detector
    /// or no indicator fired.
    pub fn not_detected(mechanism: MechanismType) -> Self {
        Self {
            mechanism,
            detected: false,
            confidence: DetectionConfidence::Uncertain,
            evidence: Vec::new(),
            clinical_implications: Vec::new(),
            override_rules: Vec::new(),
        }
    }
}
