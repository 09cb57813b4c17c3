use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::susceptibility::Interpretation;

/// A conditional reinterpretation attached to a detected mechanism.
/// Applied only when the antibiotic's current interpretation matches
/// `current` exactly. This guards against re-overriding a result a
/// clinician already corrected and against double application.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OverrideRule {
    pub antibiotic: String,
    pub current: Interpretation,
    pub new: Interpretation,
    pub reason: String,
}

/// Audit record of one applied override.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterpretationChange {
    pub antibiotic: String,
    pub old: Interpretation,
    pub new: Interpretation,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SynergyKind {
    /// Weak carbapenemase potentiated by reduced membrane permeability.
    PorinLossPotentiation,
    /// ESBL plus resistance across unrelated classes, suggesting efflux.
    EffluxMultiClass,
}

/// Informational cross-mechanism flag. Never triggers further overrides.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SynergyFlag {
    pub kind: SynergyKind,
    pub description: String,
}
