use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::pattern::MechanismType;
use crate::models::susceptibility::Interpretation;

/// One rung of the stepwise beta-lactam reasoning ladder.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReasoningStep {
    pub antibiotic: String,
    /// `None` when the antibiotic was not tested at this step.
    pub interpretation: Option<Interpretation>,
    /// Plain-language conclusion drawn at this step.
    pub conclusion: String,
}

/// Output of the sequential reasoning module. A `None` mechanism is an
/// explicit "cannot differentiate" verdict, not a missing value.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SequentialFinding {
    pub steps: Vec<ReasoningStep>,
    pub mechanism: Option<MechanismType>,
    pub narrative: String,
}
