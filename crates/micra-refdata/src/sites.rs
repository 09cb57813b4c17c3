//! Infection-site metadata.

use micra_core::abx;
use micra_core::reference::site::{DosingIntensity, InfectionSite, PenetrationClass};

pub const BLOODSTREAM: &str = "bloodstream";
pub const URINARY_TRACT: &str = "urinary_tract";
pub const RESPIRATORY: &str = "respiratory";
pub const CNS: &str = "cns";
pub const ENDOCARDITIS: &str = "endocarditis";
pub const SKIN_SOFT_TISSUE: &str = "skin_soft_tissue";
pub const INTRA_ABDOMINAL: &str = "intra_abdominal";

fn site(
    id: &str,
    name: &str,
    penetration: PenetrationClass,
    bactericidal_required: bool,
    dosing_intensity: DosingIntensity,
) -> InfectionSite {
    InfectionSite {
        id: id.to_string(),
        name: name.to_string(),
        penetration,
        bactericidal_required,
        dosing_intensity,
        ineffective_agents: Vec::new(),
        combination_preferred: false,
    }
}

pub fn records() -> Vec<InfectionSite> {
    vec![
        site(
            BLOODSTREAM,
            "Bloodstream infection",
            PenetrationClass::Standard,
            true,
            DosingIntensity::High,
        ),
        site(
            URINARY_TRACT,
            "Urinary tract infection",
            PenetrationClass::Urinary,
            false,
            DosingIntensity::Standard,
        ),
        InfectionSite {
            // Daptomycin is inactivated by pulmonary surfactant; a lab "S"
            // must never surface as a recommendation here.
            ineffective_agents: vec![abx::DAPTOMYCIN.to_string()],
            ..site(
                RESPIRATORY,
                "Lower respiratory tract infection",
                PenetrationClass::Pulmonary,
                false,
                DosingIntensity::Standard,
            )
        },
        InfectionSite {
            ineffective_agents: vec![
                abx::CEFAZOLIN.to_string(),
                abx::CLINDAMYCIN.to_string(),
            ],
            combination_preferred: true,
            ..site(
                CNS,
                "Central nervous system infection",
                PenetrationClass::CnsCritical,
                true,
                DosingIntensity::High,
            )
        },
        InfectionSite {
            combination_preferred: true,
            ..site(
                ENDOCARDITIS,
                "Infective endocarditis",
                PenetrationClass::Standard,
                true,
                DosingIntensity::High,
            )
        },
        site(
            SKIN_SOFT_TISSUE,
            "Skin and soft tissue infection",
            PenetrationClass::Standard,
            false,
            DosingIntensity::Standard,
        ),
        site(
            INTRA_ABDOMINAL,
            "Intra-abdominal infection",
            PenetrationClass::Standard,
            false,
            DosingIntensity::Standard,
        ),
    ]
}
