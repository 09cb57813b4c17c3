//! Mapping a reported value to a CLSI category against the breakpoint
//! table, with site-specific lookup and curated note attachment.

use tracing::debug;

use micra_core::models::susceptibility::{
    Interpretation, ResultOrigin, SusceptibilityResult,
};
use micra_core::models::warning::{Warning, WarningCode};
use micra_core::reference::organism::OrganismRecord;
use micra_core::reference::site::InfectionSite;
use micra_core::reference::ReferenceData;

use crate::mic;

/// An interpreted entry plus any non-fatal problems found on the way.
#[derive(Debug, Clone)]
pub struct Interpreted {
    pub result: SusceptibilityResult,
    pub warnings: Vec<Warning>,
}

/// Interpret a raw MIC string for one antibiotic.
///
/// Pure: identical inputs always yield the identical result, including at
/// values exactly equal to a threshold (`mic == S` ⇒ S, `mic == R` ⇒ R).
pub fn interpret_mic(
    reference: &ReferenceData,
    organism: &OrganismRecord,
    antibiotic: &str,
    raw: &str,
    site: Option<&InfectionSite>,
) -> Interpreted {
    let mut warnings = Vec::new();

    let Some(value) = mic::parse(raw) else {
        debug!(antibiotic, raw, "unparsable MIC");
        warnings.push(Warning::new(
            WarningCode::MalformedInput,
            format!("could not parse MIC '{raw}' for {antibiotic}; result marked NA"),
        ));
        return Interpreted {
            result: not_applicable(organism, reference, antibiotic, Some(raw)),
            warnings,
        };
    };

    if let Some(message) = mic::plausibility_warning(value) {
        warnings.push(Warning::new(WarningCode::QcRange, message));
    }

    let site_id = site.map(|s| s.id.as_str());
    let Some(breakpoint) = reference.breakpoint(organism.category, antibiotic, site_id)
    else {
        debug!(antibiotic, organism = %organism.id, "no breakpoint defined");
        warnings.push(Warning::new(
            WarningCode::MissingData,
            format!(
                "no breakpoint for {} against {antibiotic}; result marked NA",
                organism.name
            ),
        ));
        return Interpreted {
            result: not_applicable(organism, reference, antibiotic, Some(raw)),
            warnings,
        };
    };

    let interpretation = if value <= breakpoint.susceptible {
        Interpretation::S
    } else if value >= breakpoint.resistant {
        Interpretation::R
    } else {
        if breakpoint.intermediate.is_none() {
            // A value between S and R with no I-band is atypical; keep the
            // I call but flag it for review rather than silently dropping.
            warnings.push(Warning::new(
                WarningCode::AtypicalResult,
                format!(
                    "MIC {value} for {antibiotic} falls between S and R thresholds of a two-category breakpoint; review recommended"
                ),
            ));
        }
        Interpretation::I
    };

    let note = reference
        .annotation(&organism.id, antibiotic, interpretation)
        .map(str::to_string);

    Interpreted {
        result: SusceptibilityResult {
            antibiotic: antibiotic.to_string(),
            interpretation,
            mic: Some(raw.to_string()),
            origin: ResultOrigin::Tested,
            note,
        },
        warnings,
    }
}

/// Wrap a manually entered qualitative S/I/R, attaching any curated note.
pub fn qualitative(
    reference: &ReferenceData,
    organism: &OrganismRecord,
    antibiotic: &str,
    interpretation: Interpretation,
    origin: ResultOrigin,
) -> SusceptibilityResult {
    let note = reference
        .annotation(&organism.id, antibiotic, interpretation)
        .map(str::to_string);
    SusceptibilityResult {
        antibiotic: antibiotic.to_string(),
        interpretation,
        mic: None,
        origin,
        note,
    }
}

fn not_applicable(
    organism: &OrganismRecord,
    reference: &ReferenceData,
    antibiotic: &str,
    raw: Option<&str>,
) -> SusceptibilityResult {
    let note = reference
        .annotation(&organism.id, antibiotic, Interpretation::Na)
        .map(str::to_string);
    SusceptibilityResult {
        antibiotic: antibiotic.to_string(),
        interpretation: Interpretation::Na,
        mic: raw.map(str::to_string),
        origin: ResultOrigin::Tested,
        note,
    }
}
