use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::overrides::{InterpretationChange, SynergyFlag};
use crate::models::pattern::ResistancePattern;
use crate::models::sequential::SequentialFinding;
use crate::models::susceptibility::SusceptibilityPanel;
use crate::models::therapy::TherapeuticStrategy;
use crate::models::warning::Warning;

/// The complete output of one antibiogram analysis: plain data for the
/// presentation layer, no behavior. Discarded after the response is
/// returned; there is no cross-request state.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisReport {
    pub id: Uuid,
    /// False when the pipeline degraded (unknown organism, internal
    /// failure). A degraded report still carries a conservative
    /// consultation strategy set, never garbled partial output.
    pub success: bool,
    pub organism_id: String,
    pub site_id: Option<String>,
    /// Panel as interpreted from the lab values, before overrides.
    pub initial_panel: SusceptibilityPanel,
    /// Panel after mechanism-driven overrides. This is what scoring used.
    pub panel: SusceptibilityPanel,
    /// Detected mechanisms with evidence. Not-detected verdicts are omitted.
    pub patterns: Vec<ResistancePattern>,
    pub sequential: Option<SequentialFinding>,
    pub changes: Vec<InterpretationChange>,
    pub synergies: Vec<SynergyFlag>,
    /// Ranked descending by total score.
    pub strategies: Vec<TherapeuticStrategy>,
    pub warnings: Vec<Warning>,
    /// True when no tested agent remained S or I and the consultation
    /// fallback set was returned.
    pub mdr_detected: bool,
    pub analyzed_at: jiff::Timestamp,
}
