//! Organism identifiers shared by the reference dataset and the
//! species-scoped detection rules.

pub const ESCHERICHIA_COLI: &str = "escherichia_coli";
pub const KLEBSIELLA_PNEUMONIAE: &str = "klebsiella_pneumoniae";
pub const KLEBSIELLA_AEROGENES: &str = "klebsiella_aerogenes";
pub const ENTEROBACTER_CLOACAE: &str = "enterobacter_cloacae";
pub const CITROBACTER_FREUNDII: &str = "citrobacter_freundii";
pub const SERRATIA_MARCESCENS: &str = "serratia_marcescens";
pub const PROTEUS_MIRABILIS: &str = "proteus_mirabilis";
pub const PSEUDOMONAS_AERUGINOSA: &str = "pseudomonas_aeruginosa";
pub const STAPHYLOCOCCUS_AUREUS: &str = "staphylococcus_aureus";
pub const ENTEROCOCCUS_FAECALIS: &str = "enterococcus_faecalis";
pub const ENTEROCOCCUS_FAECIUM: &str = "enterococcus_faecium";
pub const STREPTOCOCCUS_PNEUMONIAE: &str = "streptococcus_pneumoniae";

/// Species with a known chromosomal or commonly plasmid-borne AmpC
/// enzyme, the applicability scope of the AmpC detector.
pub const AMPC_SPECIES: &[&str] = &[
    ESCHERICHIA_COLI,
    KLEBSIELLA_PNEUMONIAE,
    KLEBSIELLA_AEROGENES,
    ENTEROBACTER_CLOACAE,
    CITROBACTER_FREUNDII,
    SERRATIA_MARCESCENS,
];
