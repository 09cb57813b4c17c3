//! Dimension scoring. Base values, bonuses, and penalties are heuristic
//! calibrations pending clinical review; weighting lives in
//! [`ScoringWeights`] so a deployment can retune without touching this
//! module's rule tables.

use micra_core::models::pattern::MechanismType;
use micra_core::models::susceptibility::Interpretation;
use micra_core::models::therapy::{ScoreBreakdown, TherapeuticStrategy};
use micra_core::reference::drug::{
    Activity, CostTier, DrugClass, DrugMonograph, RiskLevel, Route, Spectrum, StewardshipClass,
};
use micra_core::reference::organism::OrganismCategory;
use micra_core::reference::site::{DosingIntensity, PenetrationClass};

use crate::candidates::Candidate;
use crate::tiers;
use crate::TherapyInput;

/// Organism-group affinity bonuses applied to efficacy: 30 for a
/// first-line class, 20 for a solid secondary choice, 15 for an adjunct.
const ORGANISM_CLASS_BONUS: &[(OrganismCategory, DrugClass, f64)] = &[
    (OrganismCategory::Enterobacterales, DrugClass::Cephalosporin3, 30.0),
    (OrganismCategory::Enterobacterales, DrugClass::Carbapenem, 30.0),
    (OrganismCategory::Enterobacterales, DrugClass::Cephalosporin4, 25.0),
    (OrganismCategory::Enterobacterales, DrugClass::InhibitorCombination, 20.0),
    (OrganismCategory::Enterobacterales, DrugClass::Fluoroquinolone, 20.0),
    (OrganismCategory::Enterobacterales, DrugClass::FolateInhibitor, 20.0),
    (OrganismCategory::Enterobacterales, DrugClass::Cephalosporin1, 20.0),
    (OrganismCategory::Enterobacterales, DrugClass::Nitrofuran, 20.0),
    (OrganismCategory::Enterobacterales, DrugClass::Aminoglycoside, 15.0),
    (OrganismCategory::Pseudomonas, DrugClass::Cephalosporin4, 30.0),
    (OrganismCategory::Pseudomonas, DrugClass::Cephalosporin3, 25.0),
    (OrganismCategory::Pseudomonas, DrugClass::InhibitorCombination, 25.0),
    (OrganismCategory::Pseudomonas, DrugClass::Carbapenem, 25.0),
    (OrganismCategory::Pseudomonas, DrugClass::Fluoroquinolone, 20.0),
    (OrganismCategory::Pseudomonas, DrugClass::Aminoglycoside, 15.0),
    (OrganismCategory::Pseudomonas, DrugClass::Polymyxin, 15.0),
    (OrganismCategory::Staphylococcus, DrugClass::Penicillin, 30.0),
    (OrganismCategory::Staphylococcus, DrugClass::Glycopeptide, 30.0),
    (OrganismCategory::Staphylococcus, DrugClass::Cephalosporin1, 25.0),
    (OrganismCategory::Staphylococcus, DrugClass::Lipopeptide, 25.0),
    (OrganismCategory::Staphylococcus, DrugClass::Oxazolidinone, 25.0),
    (OrganismCategory::Staphylococcus, DrugClass::FolateInhibitor, 20.0),
    (OrganismCategory::Staphylococcus, DrugClass::Lincosamide, 15.0),
    (OrganismCategory::Staphylococcus, DrugClass::Tetracycline, 15.0),
    (OrganismCategory::Enterococcus, DrugClass::Penicillin, 30.0),
    (OrganismCategory::Enterococcus, DrugClass::Glycopeptide, 25.0),
    (OrganismCategory::Enterococcus, DrugClass::Oxazolidinone, 25.0),
    (OrganismCategory::Enterococcus, DrugClass::Lipopeptide, 20.0),
    (OrganismCategory::Enterococcus, DrugClass::Nitrofuran, 15.0),
    (OrganismCategory::StreptococcusPneumoniae, DrugClass::Penicillin, 30.0),
    (OrganismCategory::StreptococcusPneumoniae, DrugClass::Cephalosporin3, 25.0),
    (OrganismCategory::StreptococcusPneumoniae, DrugClass::Glycopeptide, 20.0),
    (OrganismCategory::StreptococcusPneumoniae, DrugClass::Fluoroquinolone, 20.0),
    (OrganismCategory::StreptococcusPneumoniae, DrugClass::Oxazolidinone, 20.0),
    (OrganismCategory::StreptococcusPneumoniae, DrugClass::Macrolide, 15.0),
];

pub fn score_strategy(input: &TherapyInput, candidate: &Candidate) -> TherapeuticStrategy {
    let monographs: Vec<&DrugMonograph> = candidate
        .agents
        .iter()
        .filter_map(|a| input.reference.monograph(a))
        .collect();

    let mut rationale = candidate.rationale.clone();

    let scores = ScoreBreakdown {
        efficacy: efficacy(input, candidate, &monographs),
        safety: safety(input, &monographs),
        stewardship: stewardship(input, &monographs, &mut rationale),
        pharmacology: pharmacology(input, &monographs),
        resistance_risk: resistance_risk(input, &monographs, candidate),
        convenience: convenience(candidate, &monographs),
        cost: cost(&monographs),
    };

    let total_score = input.weights.total(&scores);
    let tier = tiers::assign(total_score, &scores);

    TherapeuticStrategy {
        kind: candidate.kind,
        agents: candidate.agents.clone(),
        scores,
        total_score,
        tier,
        rationale,
    }
}

fn efficacy(input: &TherapyInput, candidate: &Candidate, monographs: &[&DrugMonograph]) -> f64 {
    let mut score = 0.0;

    for agent in &candidate.agents {
        score += match input.panel.interpretation_of(agent) {
            Some(Interpretation::S) => 30.0,
            Some(Interpretation::I) => 15.0,
            _ => 0.0,
        };
    }

    for m in monographs {
        if let Some((_, _, bonus)) = ORGANISM_CLASS_BONUS
            .iter()
            .find(|(cat, class, _)| *cat == input.organism.category && *class == m.class)
        {
            score += bonus;
        }
        if let Some(site) = input.site {
            match site.penetration {
                PenetrationClass::CnsCritical if m.cns_penetration => score += 20.0,
                PenetrationClass::Urinary if m.urine_concentration => score += 20.0,
                _ => {}
            }
            if site.bactericidal_required && m.activity == Activity::Bactericidal {
                score += 15.0;
            }
        }
    }

    if candidate.agents.len() > 1 {
        score += 10.0;
    }

    score.min(100.0)
}

fn safety(input: &TherapyInput, monographs: &[&DrugMonograph]) -> f64 {
    let mut score: f64 = 80.0;

    for m in monographs {
        if input.patient.renal_impairment && m.renal_adjustment {
            score -= 15.0;
        }
        if input.patient.hepatic_impairment && m.hepatic_adjustment {
            score -= 15.0;
        }
        if input.patient.elderly && m.elderly_caution {
            score -= 10.0;
        }
        match m.interaction_risk {
            RiskLevel::High => score -= 20.0,
            RiskLevel::Moderate => score -= 10.0,
            RiskLevel::Low => {}
        }
    }

    score.max(0.0)
}

fn stewardship(
    input: &TherapyInput,
    monographs: &[&DrugMonograph],
    rationale: &mut Vec<String>,
) -> f64 {
    let mut score: f64 = 50.0;

    let carbapenem_justified = input
        .patterns
        .iter()
        .any(|p| p.detected && matches!(p.mechanism, MechanismType::Esbl | MechanismType::Ampc));

    for m in monographs {
        match m.spectrum {
            Spectrum::Narrow => score += 20.0,
            Spectrum::Broad => score -= 10.0,
            Spectrum::VeryBroad => score -= 20.0,
        }

        if m.class == DrugClass::Carbapenem {
            if carbapenem_justified {
                score += 10.0;
                rationale.push(
                    "carbapenem use supported by the detected beta-lactamase".to_string(),
                );
            } else {
                score -= 30.0;
                rationale.push(
                    "carbapenem use without a mechanism-driven indication carries a stewardship penalty"
                        .to_string(),
                );
            }
        }

        match m.stewardship {
            StewardshipClass::Preferred => score += 15.0,
            StewardshipClass::Standard => {}
            StewardshipClass::Restricted => score -= 20.0,
        }
    }

    score.clamp(0.0, 100.0)
}

fn pharmacology(input: &TherapyInput, monographs: &[&DrugMonograph]) -> f64 {
    let mut score: f64 = 60.0;

    for m in monographs {
        if m.activity == Activity::Bactericidal {
            score += 10.0;
        }

        if let Some(site) = input.site {
            if site.bactericidal_required && m.activity == Activity::Bacteriostatic {
                score -= 30.0;
            }
            match site.penetration {
                PenetrationClass::CnsCritical => {
                    score += if m.cns_penetration { 10.0 } else { -20.0 };
                }
                PenetrationClass::Urinary if m.urine_concentration => score += 10.0,
                _ => {}
            }
            if site.dosing_intensity == DosingIntensity::High && m.doses_per_day >= 4 {
                score -= 5.0;
            }
        }
    }

    score.clamp(0.0, 100.0)
}

fn resistance_risk(
    input: &TherapyInput,
    monographs: &[&DrugMonograph],
    candidate: &Candidate,
) -> f64 {
    let mut score: f64 = 80.0;

    for m in monographs {
        match m.resistance_induction {
            RiskLevel::High => score -= 20.0,
            RiskLevel::Moderate => score -= 10.0,
            RiskLevel::Low => {}
        }
        if organism_concern(input, m.class) {
            score -= 15.0;
        }
    }

    if candidate.agents.len() > 1 {
        score += 20.0;
    }

    score.clamp(0.0, 100.0)
}

/// Documented organism-level resistance concerns for an agent class.
fn organism_concern(input: &TherapyInput, class: DrugClass) -> bool {
    // AmpC derepression on third-generation cephalosporin exposure.
    if input.organism.ampc_inducible && class == DrugClass::Cephalosporin3 {
        return true;
    }
    // Carbapenem resistance emerging on therapy in P. aeruginosa.
    if input.organism.category == OrganismCategory::Pseudomonas && class == DrugClass::Carbapenem {
        return true;
    }
    false
}

fn convenience(candidate: &Candidate, monographs: &[&DrugMonograph]) -> f64 {
    if monographs.is_empty() {
        return 0.0;
    }

    let per_agent: f64 = monographs
        .iter()
        .map(|m| {
            let base = match m.route {
                Route::Both => 90.0,
                Route::Oral => 85.0,
                Route::Intravenous => 50.0,
            };
            (base - f64::from(m.doses_per_day.saturating_sub(1)) * 10.0).max(0.0)
        })
        .sum::<f64>()
        / monographs.len() as f64;

    let combination_penalty = if candidate.agents.len() > 1 { 10.0 } else { 0.0 };
    (per_agent - combination_penalty).clamp(0.0, 100.0)
}

fn cost(monographs: &[&DrugMonograph]) -> f64 {
    if monographs.is_empty() {
        return 0.0;
    }

    monographs
        .iter()
        .map(|m| match m.cost_tier {
            CostTier::Low => 90.0,
            CostTier::Moderate => 70.0,
            CostTier::High => 45.0,
            CostTier::Premium => 20.0,
        })
        .sum::<f64>()
        / monographs.len() as f64
}
