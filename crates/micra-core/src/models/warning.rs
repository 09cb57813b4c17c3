use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WarningCode {
    /// Antibiotic not tested or organism/antibiotic pair unknown.
    MissingData,
    /// Unparsable MIC or otherwise invalid entry; the entry became NA.
    MalformedInput,
    /// Interpretation fell between thresholds with no I-band defined.
    AtypicalResult,
    /// MIC outside the physically plausible range.
    QcRange,
    /// Entry dropped because the organism is intrinsically resistant.
    IntrinsicResistance,
    /// Sequential reasoning and the detector registry disagree.
    Reconciliation,
    /// An internal computation failed; the report is a degraded fallback.
    InternalError,
}

/// A non-fatal problem surfaced to the clinician instead of an exception.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Warning {
    pub code: WarningCode,
    pub message: String,
}

impl Warning {
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
