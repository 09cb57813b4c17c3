//! micra-therapy
//!
//! Therapeutic strategy enumeration and weighted scoring over the final
//! (overridden) panel. Pure computation against the injected reference
//! data, recomputed fresh per analysis and never persisted.

pub mod candidates;
pub mod mdr;
pub mod scoring;
pub mod tiers;

use std::cmp::Ordering;

use micra_core::models::patient::PatientContext;
use micra_core::models::pattern::ResistancePattern;
use micra_core::models::susceptibility::SusceptibilityPanel;
use micra_core::models::therapy::{ScoringWeights, TherapeuticStrategy};
use micra_core::reference::organism::OrganismRecord;
use micra_core::reference::site::InfectionSite;
use micra_core::reference::ReferenceData;

/// Everything the scorer consults for one analysis.
pub struct TherapyInput<'a> {
    pub reference: &'a ReferenceData,
    pub organism: &'a OrganismRecord,
    pub site: Option<&'a InfectionSite>,
    /// The final panel, after mechanism-driven overrides.
    pub panel: &'a SusceptibilityPanel,
    pub patterns: &'a [ResistancePattern],
    pub patient: &'a PatientContext,
    pub weights: &'a ScoringWeights,
}

pub struct TherapyOutcome {
    /// Ranked descending by total score. Never empty.
    pub strategies: Vec<TherapeuticStrategy>,
    pub mdr_detected: bool,
}

/// Enumerate, score, and rank candidate strategies.
///
/// A fully resistant panel never yields an empty list. It yields the
/// distinguished consultation fallback set with `mdr_detected` raised so
/// consumers can render the MDR case specially.
pub fn rank_strategies(input: &TherapyInput) -> TherapyOutcome {
    if !input.panel.has_viable_agent() {
        return TherapyOutcome {
            strategies: mdr::consultation_strategies(input.weights),
            mdr_detected: true,
        };
    }

    let generated = candidates::generate(input);
    if generated.is_empty() {
        // Viable lab results existed but every one was suppressed
        // (site-ineffective, intrinsic, or missing monograph). Fall back
        // to the consultation set rather than returning nothing.
        return TherapyOutcome {
            strategies: mdr::consultation_strategies(input.weights),
            mdr_detected: false,
        };
    }

    let mut strategies: Vec<TherapeuticStrategy> = generated
        .iter()
        .map(|c| scoring::score_strategy(input, c))
        .collect();

    strategies.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(Ordering::Equal)
    });

    TherapyOutcome {
        strategies,
        mdr_detected: false,
    }
}
