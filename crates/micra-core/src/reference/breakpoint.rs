use serde::{Deserialize, Serialize};

use super::organism::OrganismCategory;

/// CLSI MIC thresholds for one organism-category/antibiotic pair.
/// S uses ≤, R uses ≥. A `None` intermediate means a two-category (S/R)
/// breakpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Breakpoint {
    pub susceptible: f64,
    pub intermediate: Option<f64>,
    pub resistant: f64,
}

impl Breakpoint {
    /// S-threshold strictly below R-threshold, with any I-band between
    /// them. A malformed table is a build defect, not a runtime one.
    pub fn is_monotonic(&self) -> bool {
        if self.susceptible >= self.resistant {
            return false;
        }
        match self.intermediate {
            Some(i) => self.susceptible < i && i < self.resistant,
            None => true,
        }
    }
}

/// One row of the breakpoint table. `site` keys an infection-site-specific
/// override (e.g. meningitis); `None` is the systemic breakpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakpointEntry {
    pub category: OrganismCategory,
    pub antibiotic: String,
    pub site: Option<String>,
    pub breakpoint: Breakpoint,
}
