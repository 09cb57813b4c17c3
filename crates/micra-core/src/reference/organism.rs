use serde::{Deserialize, Serialize};

/// CLSI grouping that selects which breakpoint rows apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganismCategory {
    Enterobacterales,
    Pseudomonas,
    Staphylococcus,
    Enterococcus,
    StreptococcusPneumoniae,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GramStain {
    Positive,
    Negative,
    Variable,
}

/// An organism as supplied by the reference dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganismRecord {
    pub id: String,
    pub name: String,
    pub category: OrganismCategory,
    pub gram_stain: GramStain,
    /// Antibiotics this species is never treatable with. The pipeline
    /// filters these out of candidate panels and never reports them as
    /// testable.
    pub intrinsic_resistance: Vec<String>,
    /// Species with a chromosomally inducible AmpC enzyme.
    pub ampc_inducible: bool,
}

impl OrganismRecord {
    pub fn is_intrinsically_resistant(&self, antibiotic: &str) -> bool {
        self.intrinsic_resistance.iter().any(|a| a == antibiotic)
    }

    pub fn is_gram_positive(&self) -> bool {
        self.gram_stain == GramStain::Positive
    }
}
