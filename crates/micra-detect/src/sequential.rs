//! Stepwise beta-lactam reasoning for Enterobacterales.
//!
//! Walks the fixed ladder ampicillin → first-generation cephalosporin →
//! third-generation cephalosporin → inhibitor combination → carbapenem,
//! advancing only while each rung is resistant. Susceptibility at any
//! rung implies a simpler (or absent) mechanism and stops the walk.
//! Intrinsic resistance counts as resistance at a rung, since the panel
//! never carries intrinsically resistant agents.
//!
//! This is an independent cross-check on the parallel detector registry;
//! it names a mechanism only when the ladder reaches a definitive rung,
//! and says `None` explicitly when the data cannot differentiate
//! ESBL from AmpC.

use micra_core::abx;
use micra_core::models::pattern::MechanismType;
use micra_core::models::sequential::{ReasoningStep, SequentialFinding};
use micra_core::models::susceptibility::{Interpretation, SusceptibilityPanel};
use micra_core::reference::organism::{OrganismCategory, OrganismRecord};

/// Outcome of probing one rung of the ladder.
enum Rung {
    /// Resistant (tested R, or intrinsic): keep climbing.
    Resistant,
    /// Tested and not resistant: the walk stops here.
    NotResistant(Interpretation),
    /// Not tested and not intrinsic: the walk cannot continue.
    Untested,
}

fn probe(organism: &OrganismRecord, panel: &SusceptibilityPanel, antibiotic: &str) -> Rung {
    if organism.is_intrinsically_resistant(antibiotic) {
        return Rung::Resistant;
    }
    match panel.interpretation_of(antibiotic) {
        Some(Interpretation::R) => Rung::Resistant,
        Some(i) => Rung::NotResistant(i),
        None => Rung::Untested,
    }
}

fn first_tested<'a>(
    organism: &OrganismRecord,
    panel: &SusceptibilityPanel,
    candidates: &[&'a str],
) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .find(|a| panel.get(a).is_some() || organism.is_intrinsically_resistant(a))
}

fn step(antibiotic: &str, interpretation: Option<Interpretation>, conclusion: &str) -> ReasoningStep {
    ReasoningStep {
        antibiotic: antibiotic.to_string(),
        interpretation,
        conclusion: conclusion.to_string(),
    }
}

fn finding(
    steps: Vec<ReasoningStep>,
    mechanism: Option<MechanismType>,
    narrative: &str,
) -> SequentialFinding {
    SequentialFinding {
        steps,
        mechanism,
        narrative: narrative.to_string(),
    }
}

/// Walk the ladder. Returns `None` for organisms outside Enterobacterales.
pub fn analyze(
    organism: &OrganismRecord,
    panel: &SusceptibilityPanel,
) -> Option<SequentialFinding> {
    if organism.category != OrganismCategory::Enterobacterales {
        return None;
    }

    let mut steps = Vec::new();

    // Rung 1: ampicillin.
    match probe(organism, panel, abx::AMPICILLIN) {
        Rung::Untested => {
            steps.push(step(
                abx::AMPICILLIN,
                None,
                "ampicillin not tested; stepwise reasoning cannot start",
            ));
            return Some(finding(
                steps,
                None,
                "Ampicillin was not tested, so the beta-lactam ladder could not be walked.",
            ));
        }
        Rung::NotResistant(i) => {
            steps.push(step(
                abx::AMPICILLIN,
                Some(i),
                "ampicillin active: wild-type phenotype, no acquired beta-lactamase",
            ));
            return Some(finding(
                steps,
                None,
                "Ampicillin remains active; no acquired beta-lactamase is evident.",
            ));
        }
        Rung::Resistant => {
            steps.push(step(
                abx::AMPICILLIN,
                panel.interpretation_of(abx::AMPICILLIN),
                "ampicillin resistant: at least penicillinase-level activity",
            ));
        }
    }

    // Rung 2: first-generation cephalosporin.
    match probe(organism, panel, abx::CEFAZOLIN) {
        Rung::Untested => {
            steps.push(step(
                abx::CEFAZOLIN,
                None,
                "first-generation cephalosporin not tested; enzyme cannot be graded further",
            ));
            return Some(finding(
                steps,
                None,
                "Resistance reaches at least penicillinase level, but without a first-generation cephalosporin result the enzyme cannot be graded further.",
            ));
        }
        Rung::NotResistant(i) => {
            steps.push(step(
                abx::CEFAZOLIN,
                Some(i),
                "first-generation cephalosporin active: narrow-spectrum penicillinase",
            ));
            return Some(finding(
                steps,
                Some(MechanismType::Penicillinase),
                "A narrow-spectrum penicillinase: aminopenicillins are lost but cephalosporins remain active.",
            ));
        }
        Rung::Resistant => {
            steps.push(step(
                abx::CEFAZOLIN,
                panel.interpretation_of(abx::CEFAZOLIN),
                "first-generation cephalosporin resistant: activity extends beyond penicillins",
            ));
        }
    }

    // Rung 3: third-generation cephalosporin (first available indicator).
    let Some(ceph3) = first_tested(organism, panel, abx::THIRD_GEN_CEPHALOSPORINS) else {
        steps.push(step(
            abx::CEFTRIAXONE,
            None,
            "no third-generation cephalosporin tested; cannot assess extended-spectrum activity",
        ));
        return Some(finding(
            steps,
            None,
            "Early cephalosporins are lost, but no third-generation cephalosporin result is available to assess extended-spectrum activity.",
        ));
    };
    match probe(organism, panel, ceph3) {
        Rung::Untested => unreachable!("first_tested returned an available rung"),
        Rung::NotResistant(i) => {
            steps.push(step(
                ceph3,
                Some(i),
                "third-generation cephalosporin active: extended-spectrum enzymes unlikely",
            ));
            return Some(finding(
                steps,
                None,
                "Resistance is confined to early cephalosporins; an extended-spectrum enzyme is unlikely, though no single mechanism is established.",
            ));
        }
        Rung::Resistant => {
            steps.push(step(
                ceph3,
                panel.interpretation_of(ceph3),
                "third-generation cephalosporin resistant: ESBL or AmpC",
            ));
        }
    }

    // Rung 4: beta-lactamase-inhibitor combination.
    let Some(combo) = first_tested(organism, panel, abx::INHIBITOR_COMBINATIONS) else {
        steps.push(step(
            abx::PIPERACILLIN_TAZOBACTAM,
            None,
            "no inhibitor combination tested; ESBL and AmpC cannot be differentiated",
        ));
        return Some(finding(
            steps,
            None,
            "Extended-spectrum activity is present, but without beta-lactamase-inhibitor data ESBL cannot be differentiated from AmpC.",
        ));
    };
    match probe(organism, panel, combo) {
        Rung::Untested => unreachable!("first_tested returned an available rung"),
        Rung::NotResistant(i) => {
            steps.push(step(
                combo,
                Some(i),
                "inhibitor combination restores activity: clavulanate/tazobactam-inhibited enzyme, ESBL favored",
            ));
            return Some(finding(
                steps,
                Some(MechanismType::Esbl),
                "Inhibitor restoration alongside extended-spectrum cephalosporin resistance favors an ESBL.",
            ));
        }
        Rung::Resistant => {
            steps.push(step(
                combo,
                panel.interpretation_of(combo),
                "no inhibitor restoration: AmpC favored, or an inhibitor-resistant enzyme",
            ));
        }
    }

    // Rung 5: carbapenem (first available).
    let Some(carbapenem) = first_tested(
        organism,
        panel,
        &[abx::MEROPENEM, abx::ERTAPENEM, abx::IMIPENEM, abx::DORIPENEM],
    ) else {
        steps.push(step(
            abx::MEROPENEM,
            None,
            "no carbapenem tested; AmpC favored but carbapenemase cannot be excluded",
        ));
        return Some(finding(
            steps,
            Some(MechanismType::Ampc),
            "The pattern favors AmpC, but with no carbapenem result a carbapenemase cannot be excluded.",
        ));
    };
    match probe(organism, panel, carbapenem) {
        Rung::Untested => unreachable!("first_tested returned an available rung"),
        Rung::NotResistant(i) => {
            steps.push(step(
                carbapenem,
                Some(i),
                "carbapenem active: AmpC-type enzyme most consistent",
            ));
            Some(finding(
                steps,
                Some(MechanismType::Ampc),
                "Carbapenems are spared while inhibitor combinations are not: an AmpC-type enzyme is the most consistent explanation.",
            ))
        }
        Rung::Resistant => {
            steps.push(step(
                carbapenem,
                panel.interpretation_of(carbapenem),
                "carbapenem resistant: carbapenemase",
            ));
            Some(finding(
                steps,
                Some(MechanismType::Carbapenemase),
                "Resistance climbs the entire ladder including carbapenems: a carbapenemase is the leading explanation.",
            ))
        }
    }
}
