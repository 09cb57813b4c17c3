use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::patient::PatientContext;
use crate::models::susceptibility::{Interpretation, ResultOrigin};

/// A reported value for one antibiotic: either a raw MIC string for the
/// breakpoint interpreter, or a qualitative S/I/R entered directly.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EntryValue {
    Mic(String),
    Qualitative(Interpretation),
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PanelEntry {
    pub antibiotic: String,
    pub value: EntryValue,
    /// How a qualitative entry came about. MIC entries always interpret
    /// as `tested`.
    pub origin: ResultOrigin,
}

/// One antibiogram to analyze.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AntibiogramRequest {
    pub organism_id: String,
    pub site_id: Option<String>,
    pub entries: Vec<PanelEntry>,
    pub patient: PatientContext,
}
