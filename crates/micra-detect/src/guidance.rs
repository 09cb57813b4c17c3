//! Static clinical guidance keyed by mechanism, and builders for the
//! declarative override-rule rows detectors attach to their patterns.

use micra_core::models::overrides::OverrideRule;
use micra_core::models::pattern::MechanismType;
use micra_core::models::susceptibility::Interpretation;

/// Clinical implications shown to the clinician for a detected mechanism.
pub fn implications(mechanism: MechanismType) -> &'static [&'static str] {
    match mechanism {
        MechanismType::Penicillinase => &[
            "Aminopenicillins are unreliable; beta-lactamase-stable agents remain active",
            "First-generation cephalosporins are appropriate when susceptible",
        ],
        MechanismType::Esbl => &[
            "Avoid cephalosporins regardless of in-vitro susceptibility",
            "Carbapenems are the agents of choice for serious infection",
            "Beta-lactamase-inhibitor combinations may be considered for non-severe, source-controlled infection",
        ],
        MechanismType::Ampc => &[
            "Avoid third-generation cephalosporins and inhibitor combinations; AmpC is not clavulanate-inhibited",
            "Cefepime or a carbapenem is preferred for serious infection",
        ],
        MechanismType::Carbapenemase => &[
            "Consult infectious diseases before finalizing therapy",
            "Consider ceftazidime-avibactam, combination therapy, or a novel agent guided by subtype testing",
            "Send the isolate for molecular carbapenemase confirmation",
        ],
        MechanismType::Kpc => &[
            "KPC-type pattern; ceftazidime-avibactam or meropenem-vaborbactam typically retain activity",
        ],
        MechanismType::Mbl => &[
            "Metallo-beta-lactamase pattern; avibactam-based combinations are inactive, aztreonam may retain activity",
        ],
        MechanismType::OxaCarbapenemase => &[
            "OXA-48-like pattern; cephalosporins may test susceptible but carbapenem activity is unreliable",
        ],
        MechanismType::Mrsa => &[
            "Avoid all beta-lactams including cephalosporins and carbapenems",
            "Vancomycin is first-line; daptomycin or linezolid are alternatives by site",
        ],
        MechanismType::Vre => &[
            "Vancomycin must not be used",
            "Linezolid or daptomycin are the usual options; confirm species-level susceptibility",
        ],
        MechanismType::Mlsb => &[
            "Clindamycin failure risk; confirm inducible resistance with a D-test before relying on it",
        ],
        MechanismType::FluoroquinoloneResistance => &[
            "Treat the fluoroquinolone class as compromised; single-agent susceptibility is unreliable",
        ],
        MechanismType::AminoglycosideResistance => &[
            "Modifying enzymes are substrate-specific; agents still testing susceptible may retain activity",
        ],
    }
}

/// Rows forcing S and I results to R for each listed antibiotic. The
/// resolver's exact current-interpretation match makes these idempotent.
pub fn force_resistant(antibiotics: &[&str], reason: &str) -> Vec<OverrideRule> {
    antibiotics
        .iter()
        .flat_map(|a| {
            [
                OverrideRule {
                    antibiotic: a.to_string(),
                    current: Interpretation::S,
                    new: Interpretation::R,
                    reason: reason.to_string(),
                },
                OverrideRule {
                    antibiotic: a.to_string(),
                    current: Interpretation::I,
                    new: Interpretation::R,
                    reason: reason.to_string(),
                },
            ]
        })
        .collect()
}

/// Rows promoting only I results to R (used where an S result would be
/// a genuine discordance worth surfacing rather than silently flipping).
pub fn intermediate_to_resistant(antibiotics: &[&str], reason: &str) -> Vec<OverrideRule> {
    antibiotics
        .iter()
        .map(|a| OverrideRule {
            antibiotic: a.to_string(),
            current: Interpretation::I,
            new: Interpretation::R,
            reason: reason.to_string(),
        })
        .collect()
}
