use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// CLSI interpretive category for one antibiotic result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Interpretation {
    /// Susceptible.
    S,
    /// Intermediate.
    I,
    /// Resistant.
    R,
    /// Not applicable: no breakpoint, or the value could not be interpreted.
    Na,
}

/// How a panel entry came to carry its interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResultOrigin {
    /// Entered directly by the clinician as S/I/R.
    Manual,
    /// Derived from a tested MIC against a breakpoint.
    Tested,
    /// Assumed from class behavior, not tested.
    Assumed,
}

/// One antibiotic's interpreted result. Immutable once produced; the
/// override resolver builds new copies rather than mutating in place.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SusceptibilityResult {
    pub antibiotic: String,
    pub interpretation: Interpretation,
    /// The raw MIC string as supplied (e.g. "≤0.25", "8/4"), if any.
    pub mic: Option<String>,
    pub origin: ResultOrigin,
    /// Curated clinical note or override reason attached to this result.
    pub note: Option<String>,
}

/// The full set of results for one antibiogram. Absence of an antibiotic
/// is a normal state, never an error.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SusceptibilityPanel {
    pub results: Vec<SusceptibilityResult>,
}

impl SusceptibilityPanel {
    pub fn new(results: Vec<SusceptibilityResult>) -> Self {
        Self { results }
    }

    pub fn get(&self, antibiotic: &str) -> Option<&SusceptibilityResult> {
        self.results.iter().find(|r| r.antibiotic == antibiotic)
    }

    pub fn interpretation_of(&self, antibiotic: &str) -> Option<Interpretation> {
        self.get(antibiotic).map(|r| r.interpretation)
    }

    /// True only when the antibiotic was tested and carries exactly this
    /// interpretation. Missing entries never match.
    pub fn is(&self, antibiotic: &str, interpretation: Interpretation) -> bool {
        self.interpretation_of(antibiotic) == Some(interpretation)
    }

    pub fn is_resistant(&self, antibiotic: &str) -> bool {
        self.is(antibiotic, Interpretation::R)
    }

    pub fn is_susceptible(&self, antibiotic: &str) -> bool {
        self.is(antibiotic, Interpretation::S)
    }

    /// How many members of `group` carry the given interpretation.
    pub fn count_with(&self, group: &[&str], interpretation: Interpretation) -> usize {
        group
            .iter()
            .filter(|a| self.is(a, interpretation))
            .count()
    }

    pub fn count_resistant(&self, group: &[&str]) -> usize {
        self.count_with(group, Interpretation::R)
    }

    /// Members of `group` that were tested and are R or I.
    pub fn count_nonsusceptible(&self, group: &[&str]) -> usize {
        group
            .iter()
            .filter(|a| {
                matches!(
                    self.interpretation_of(a),
                    Some(Interpretation::R) | Some(Interpretation::I)
                )
            })
            .count()
    }

    /// Whether anything in the panel is still treatable (S or I).
    pub fn has_viable_agent(&self) -> bool {
        self.results.iter().any(|r| {
            matches!(r.interpretation, Interpretation::S | Interpretation::I)
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &SusceptibilityResult> {
        self.results.iter()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
