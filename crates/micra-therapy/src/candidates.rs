//! Candidate strategy enumeration.
//!
//! Monotherapy per susceptible agent, plus intermediate agents on the
//! dose-optimization allow-list. Combinations are generated only when
//! the infection context demands them, from a declarative class-pair
//! partner table.

use micra_core::abx;
use micra_core::models::pattern::MechanismType;
use micra_core::models::susceptibility::Interpretation;
use micra_core::models::therapy::StrategyKind;
use micra_core::reference::drug::DrugClass;
use micra_core::reference::organism::OrganismCategory;
use micra_core::reference::site::PenetrationClass;

use crate::TherapyInput;

/// Agents where an intermediate result can be salvaged by dose
/// optimization.
pub const INTERMEDIATE_SALVAGE: &[&str] = &[
    abx::MEROPENEM,
    abx::CEFEPIME,
    abx::PIPERACILLIN_TAZOBACTAM,
    abx::CIPROFLOXACIN,
    abx::VANCOMYCIN,
];

/// Backbone/adjunct class pairs eligible for combination regimens.
const COMBINATION_PARTNERS: &[(DrugClass, DrugClass)] = &[
    (DrugClass::Penicillin, DrugClass::Aminoglycoside),
    (DrugClass::InhibitorCombination, DrugClass::Aminoglycoside),
    (DrugClass::Cephalosporin3, DrugClass::Aminoglycoside),
    (DrugClass::Cephalosporin4, DrugClass::Aminoglycoside),
    (DrugClass::Cephalosporin4, DrugClass::Fluoroquinolone),
    (DrugClass::Carbapenem, DrugClass::Aminoglycoside),
    (DrugClass::Carbapenem, DrugClass::Polymyxin),
    (DrugClass::Glycopeptide, DrugClass::Aminoglycoside),
];

/// A candidate regimen prior to scoring.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub kind: StrategyKind,
    pub agents: Vec<String>,
    pub rationale: Vec<String>,
}

pub fn generate(input: &TherapyInput) -> Vec<Candidate> {
    let mut out = Vec::new();
    let mut eligible: Vec<&str> = Vec::new();

    for result in input.panel.iter() {
        let agent = result.antibiotic.as_str();

        let salvaged = match result.interpretation {
            Interpretation::S => false,
            Interpretation::I if INTERMEDIATE_SALVAGE.contains(&agent) => true,
            _ => continue,
        };

        // The pipeline filters intrinsically resistant agents out of the
        // panel; this guard holds the invariant even for panels built
        // elsewhere.
        if input.organism.is_intrinsically_resistant(agent) {
            continue;
        }
        if input.site.is_some_and(|s| s.is_ineffective(agent)) {
            continue;
        }
        if input.reference.monograph(agent).is_none() {
            continue;
        }

        let mut rationale = Vec::new();
        if salvaged {
            rationale.push(format!(
                "intermediate result salvaged by dose optimization for {agent}"
            ));
        }

        eligible.push(agent);
        out.push(Candidate {
            kind: StrategyKind::Monotherapy,
            agents: vec![agent.to_string()],
            rationale,
        });
    }

    if let Some(context) = combination_context(input) {
        out.extend(combinations(input, &eligible, &context));
    }

    out
}

/// Why the context demands combination regimens, if it does.
fn combination_context(input: &TherapyInput) -> Option<String> {
    if let Some(site) = input.site
        && site.combination_preferred
    {
        return Some(format!("combination therapy is standard of care for {}", site.name));
    }
    if input
        .patterns
        .iter()
        .any(|p| p.detected && p.mechanism == MechanismType::Carbapenemase)
    {
        return Some("combination therapy recommended for carbapenemase producers".to_string());
    }
    if input.organism.category == OrganismCategory::Pseudomonas
        && input
            .site
            .is_some_and(|s| s.penetration == PenetrationClass::Pulmonary)
    {
        return Some(
            "combination therapy considered for Pseudomonas respiratory infection".to_string(),
        );
    }
    None
}

fn combinations(input: &TherapyInput, eligible: &[&str], context: &str) -> Vec<Candidate> {
    let mut out = Vec::new();

    for backbone in eligible {
        let Some(backbone_class) = input.reference.monograph(backbone).map(|m| m.class) else {
            continue;
        };
        for adjunct in eligible {
            if backbone == adjunct {
                continue;
            }
            let Some(adjunct_class) = input.reference.monograph(adjunct).map(|m| m.class) else {
                continue;
            };
            if COMBINATION_PARTNERS.contains(&(backbone_class, adjunct_class)) {
                out.push(Candidate {
                    kind: StrategyKind::Combination,
                    agents: vec![backbone.to_string(), adjunct.to_string()],
                    rationale: vec![context.to_string()],
                });
            }
        }
    }

    out
}
