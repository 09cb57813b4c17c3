//! Curated clinical notes for well-known organism/antibiotic/
//! interpretation combinations. Looked up by the interpreter, never
//! inferred.

use micra_core::abx;
use micra_core::models::susceptibility::Interpretation;
use micra_core::org;
use micra_core::reference::ClinicalAnnotation;

fn note(
    organism_id: &str,
    antibiotic: &str,
    interpretation: Interpretation,
    text: &str,
) -> ClinicalAnnotation {
    ClinicalAnnotation {
        organism_id: organism_id.to_string(),
        antibiotic: antibiotic.to_string(),
        interpretation,
        note: text.to_string(),
    }
}

pub fn records() -> Vec<ClinicalAnnotation> {
    vec![
        note(
            org::STAPHYLOCOCCUS_AUREUS,
            abx::OXACILLIN,
            Interpretation::R,
            "Oxacillin resistance predicts resistance to all beta-lactams; avoid the entire class.",
        ),
        note(
            org::STAPHYLOCOCCUS_AUREUS,
            abx::CEFOXITIN,
            Interpretation::R,
            "Positive cefoxitin screen; treat as MRSA.",
        ),
        note(
            org::ENTEROCOCCUS_FAECALIS,
            abx::VANCOMYCIN,
            Interpretation::R,
            "Vancomycin-resistant Enterococcus; confirm with a second method and isolate per infection control policy.",
        ),
        note(
            org::ENTEROCOCCUS_FAECIUM,
            abx::VANCOMYCIN,
            Interpretation::R,
            "Vancomycin-resistant Enterococcus; confirm with a second method and isolate per infection control policy.",
        ),
        note(
            org::ESCHERICHIA_COLI,
            abx::CEFTRIAXONE,
            Interpretation::R,
            "Third-generation cephalosporin resistance in E. coli; consider ESBL confirmation.",
        ),
        note(
            org::KLEBSIELLA_PNEUMONIAE,
            abx::CEFTRIAXONE,
            Interpretation::R,
            "Third-generation cephalosporin resistance in K. pneumoniae; consider ESBL confirmation.",
        ),
        note(
            org::STREPTOCOCCUS_PNEUMONIAE,
            abx::PENICILLIN,
            Interpretation::R,
            "Penicillin-resistant pneumococcus; meningitis and non-meningitis breakpoints differ.",
        ),
        note(
            org::PSEUDOMONAS_AERUGINOSA,
            abx::MEROPENEM,
            Interpretation::R,
            "Carbapenem-resistant P. aeruginosa; porin loss and efflux are more common than carbapenemase production.",
        ),
        note(
            org::ENTEROBACTER_CLOACAE,
            abx::CEFTRIAXONE,
            Interpretation::S,
            "Inducible AmpC may derepress on third-generation cephalosporin therapy; monitor closely.",
        ),
    ]
}
