use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrugClass {
    Penicillin,
    InhibitorCombination,
    Cephalosporin1,
    Cephalosporin2,
    Cephalosporin3,
    Cephalosporin4,
    Cephamycin,
    Carbapenem,
    Monobactam,
    Fluoroquinolone,
    Aminoglycoside,
    Glycopeptide,
    Lipopeptide,
    Oxazolidinone,
    Macrolide,
    Lincosamide,
    Tetracycline,
    FolateInhibitor,
    Nitrofuran,
    Polymyxin,
}

impl DrugClass {
    pub fn is_beta_lactam(&self) -> bool {
        matches!(
            self,
            Self::Penicillin
                | Self::InhibitorCombination
                | Self::Cephalosporin1
                | Self::Cephalosporin2
                | Self::Cephalosporin3
                | Self::Cephalosporin4
                | Self::Cephamycin
                | Self::Carbapenem
                | Self::Monobactam
        )
    }

    pub fn is_cephalosporin(&self) -> bool {
        matches!(
            self,
            Self::Cephalosporin1
                | Self::Cephalosporin2
                | Self::Cephalosporin3
                | Self::Cephalosporin4
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spectrum {
    Narrow,
    Broad,
    VeryBroad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    Bactericidal,
    Bacteriostatic,
}

/// Stewardship program classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StewardshipClass {
    /// First-line agent the program wants used.
    Preferred,
    Standard,
    /// Restricted-reserve agent requiring approval.
    Restricted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostTier {
    Low,
    Moderate,
    High,
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Oral,
    Intravenous,
    Both,
}

/// Static per-drug properties consulted by the strategy scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrugMonograph {
    pub id: String,
    pub name: String,
    pub class: DrugClass,
    pub spectrum: Spectrum,
    pub activity: Activity,
    pub stewardship: StewardshipClass,
    pub renal_adjustment: bool,
    pub hepatic_adjustment: bool,
    pub interaction_risk: RiskLevel,
    pub elderly_caution: bool,
    /// Propensity to select resistance on therapy.
    pub resistance_induction: RiskLevel,
    pub cost_tier: CostTier,
    pub route: Route,
    pub doses_per_day: u8,
    pub cns_penetration: bool,
    pub urine_concentration: bool,
}
