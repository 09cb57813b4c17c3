use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Patient factors consulted by the safety dimension of strategy scoring.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientContext {
    pub renal_impairment: bool,
    pub hepatic_impairment: bool,
    pub elderly: bool,
}
