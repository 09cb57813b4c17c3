use serde::{Deserialize, Serialize};

/// Tissue-penetration demand class of an infection site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenetrationClass {
    Standard,
    /// Blood–brain barrier penetration is decisive.
    CnsCritical,
    /// Urinary concentration matters more than serum levels.
    Urinary,
    Pulmonary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DosingIntensity {
    Standard,
    High,
}

/// Infection-site metadata consulted during candidate generation and
/// scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfectionSite {
    pub id: String,
    pub name: String,
    pub penetration: PenetrationClass,
    pub bactericidal_required: bool,
    pub dosing_intensity: DosingIntensity,
    /// Agents with documented clinical ineffectiveness at this site
    /// regardless of lab result (e.g. daptomycin inactivated by pulmonary
    /// surfactant). A lab "S" must not become a recommendation here.
    pub ineffective_agents: Vec<String>,
    /// Sites where combination regimens are standard of care.
    pub combination_preferred: bool,
}

impl InfectionSite {
    pub fn is_ineffective(&self, antibiotic: &str) -> bool {
        self.ineffective_agents.iter().any(|a| a == antibiotic)
    }
}
