//! MIC breakpoint tables per CLSI organism group.
//!
//! S uses ≤, R uses ≥. Rows with no intermediate value are genuine
//! two-category breakpoints (e.g. trimethoprim-sulfamethoxazole).
//! Meningitis rows for S. pneumoniae carry the `cns` site key and take
//! precedence over the systemic rows at that site.

use micra_core::abx;
use micra_core::reference::breakpoint::{Breakpoint, BreakpointEntry};
use micra_core::reference::organism::OrganismCategory;

use crate::sites;

use OrganismCategory::*;

fn row(
    category: OrganismCategory,
    antibiotic: &str,
    susceptible: f64,
    intermediate: Option<f64>,
    resistant: f64,
) -> BreakpointEntry {
    BreakpointEntry {
        category,
        antibiotic: antibiotic.to_string(),
        site: None,
        breakpoint: Breakpoint {
            susceptible,
            intermediate,
            resistant,
        },
    }
}

fn site_row(
    category: OrganismCategory,
    antibiotic: &str,
    site: &str,
    susceptible: f64,
    intermediate: Option<f64>,
    resistant: f64,
) -> BreakpointEntry {
    BreakpointEntry {
        category,
        antibiotic: antibiotic.to_string(),
        site: Some(site.to_string()),
        breakpoint: Breakpoint {
            susceptible,
            intermediate,
            resistant,
        },
    }
}

pub fn entries() -> Vec<BreakpointEntry> {
    vec![
        // Enterobacterales
        row(Enterobacterales, abx::AMPICILLIN, 8.0, Some(16.0), 32.0),
        row(Enterobacterales, abx::AMOXICILLIN_CLAVULANATE, 8.0, Some(16.0), 32.0),
        row(Enterobacterales, abx::AMPICILLIN_SULBACTAM, 8.0, Some(16.0), 32.0),
        row(Enterobacterales, abx::PIPERACILLIN_TAZOBACTAM, 8.0, Some(16.0), 32.0),
        row(Enterobacterales, abx::CEFAZOLIN, 2.0, Some(4.0), 8.0),
        row(Enterobacterales, abx::CEFUROXIME, 8.0, Some(16.0), 32.0),
        row(Enterobacterales, abx::CEFOXITIN, 8.0, Some(16.0), 32.0),
        row(Enterobacterales, abx::CEFTRIAXONE, 1.0, Some(2.0), 4.0),
        row(Enterobacterales, abx::CEFOTAXIME, 1.0, Some(2.0), 4.0),
        row(Enterobacterales, abx::CEFTAZIDIME, 4.0, Some(8.0), 16.0),
        row(Enterobacterales, abx::CEFEPIME, 2.0, Some(8.0), 16.0),
        row(Enterobacterales, abx::ERTAPENEM, 0.5, Some(1.0), 2.0),
        row(Enterobacterales, abx::MEROPENEM, 1.0, Some(2.0), 4.0),
        row(Enterobacterales, abx::IMIPENEM, 1.0, Some(2.0), 4.0),
        row(Enterobacterales, abx::DORIPENEM, 1.0, Some(2.0), 4.0),
        row(Enterobacterales, abx::AZTREONAM, 4.0, Some(8.0), 16.0),
        row(Enterobacterales, abx::CIPROFLOXACIN, 0.25, Some(0.5), 1.0),
        row(Enterobacterales, abx::LEVOFLOXACIN, 0.5, Some(1.0), 2.0),
        row(Enterobacterales, abx::MOXIFLOXACIN, 0.25, Some(0.5), 1.0),
        row(Enterobacterales, abx::GENTAMICIN, 2.0, Some(4.0), 8.0),
        row(Enterobacterales, abx::TOBRAMYCIN, 2.0, Some(4.0), 8.0),
        row(Enterobacterales, abx::AMIKACIN, 16.0, Some(32.0), 64.0),
        row(Enterobacterales, abx::TRIMETHOPRIM_SULFAMETHOXAZOLE, 2.0, None, 4.0),
        row(Enterobacterales, abx::NITROFURANTOIN, 32.0, Some(64.0), 128.0),
        row(Enterobacterales, abx::COLISTIN, 2.0, None, 4.0),
        row(Enterobacterales, abx::DOXYCYCLINE, 4.0, Some(8.0), 16.0),
        // Pseudomonas aeruginosa
        row(Pseudomonas, abx::PIPERACILLIN_TAZOBACTAM, 16.0, Some(64.0), 128.0),
        row(Pseudomonas, abx::CEFTAZIDIME, 8.0, Some(16.0), 32.0),
        row(Pseudomonas, abx::CEFEPIME, 8.0, Some(16.0), 32.0),
        row(Pseudomonas, abx::MEROPENEM, 2.0, Some(4.0), 8.0),
        row(Pseudomonas, abx::IMIPENEM, 2.0, Some(4.0), 8.0),
        row(Pseudomonas, abx::DORIPENEM, 2.0, Some(4.0), 8.0),
        row(Pseudomonas, abx::AZTREONAM, 8.0, Some(16.0), 32.0),
        row(Pseudomonas, abx::CIPROFLOXACIN, 0.5, Some(1.0), 2.0),
        row(Pseudomonas, abx::LEVOFLOXACIN, 1.0, Some(2.0), 4.0),
        row(Pseudomonas, abx::GENTAMICIN, 4.0, Some(8.0), 16.0),
        row(Pseudomonas, abx::TOBRAMYCIN, 4.0, Some(8.0), 16.0),
        row(Pseudomonas, abx::AMIKACIN, 16.0, Some(32.0), 64.0),
        row(Pseudomonas, abx::COLISTIN, 2.0, None, 4.0),
        // Staphylococcus
        row(Staphylococcus, abx::PENICILLIN, 0.12, None, 0.25),
        row(Staphylococcus, abx::OXACILLIN, 2.0, None, 4.0),
        row(Staphylococcus, abx::METHICILLIN, 8.0, None, 16.0),
        row(Staphylococcus, abx::CEFOXITIN, 4.0, None, 8.0),
        row(Staphylococcus, abx::VANCOMYCIN, 2.0, Some(8.0), 16.0),
        row(Staphylococcus, abx::TEICOPLANIN, 8.0, Some(16.0), 32.0),
        row(Staphylococcus, abx::DAPTOMYCIN, 1.0, None, 2.0),
        row(Staphylococcus, abx::LINEZOLID, 4.0, None, 8.0),
        row(Staphylococcus, abx::ERYTHROMYCIN, 0.5, Some(4.0), 8.0),
        row(Staphylococcus, abx::CLINDAMYCIN, 0.5, Some(2.0), 4.0),
        row(Staphylococcus, abx::DOXYCYCLINE, 4.0, Some(8.0), 16.0),
        row(Staphylococcus, abx::TRIMETHOPRIM_SULFAMETHOXAZOLE, 2.0, None, 4.0),
        row(Staphylococcus, abx::GENTAMICIN, 4.0, Some(8.0), 16.0),
        row(Staphylococcus, abx::CIPROFLOXACIN, 1.0, Some(2.0), 4.0),
        // Enterococcus
        row(Enterococcus, abx::AMPICILLIN, 8.0, None, 16.0),
        row(Enterococcus, abx::PENICILLIN, 8.0, None, 16.0),
        row(Enterococcus, abx::VANCOMYCIN, 4.0, Some(16.0), 32.0),
        row(Enterococcus, abx::TEICOPLANIN, 8.0, Some(16.0), 32.0),
        row(Enterococcus, abx::DAPTOMYCIN, 4.0, None, 8.0),
        row(Enterococcus, abx::LINEZOLID, 2.0, Some(4.0), 8.0),
        row(Enterococcus, abx::NITROFURANTOIN, 32.0, Some(64.0), 128.0),
        row(Enterococcus, abx::DOXYCYCLINE, 4.0, Some(8.0), 16.0),
        row(Enterococcus, abx::ERYTHROMYCIN, 0.5, Some(4.0), 8.0),
        // Streptococcus pneumoniae: systemic rows, then meningitis rows
        row(StreptococcusPneumoniae, abx::PENICILLIN, 2.0, Some(4.0), 8.0),
        row(StreptococcusPneumoniae, abx::CEFTRIAXONE, 1.0, Some(2.0), 4.0),
        row(StreptococcusPneumoniae, abx::CEFOTAXIME, 1.0, Some(2.0), 4.0),
        row(StreptococcusPneumoniae, abx::VANCOMYCIN, 1.0, None, 2.0),
        row(StreptococcusPneumoniae, abx::ERYTHROMYCIN, 0.25, Some(0.5), 1.0),
        row(StreptococcusPneumoniae, abx::CLINDAMYCIN, 0.25, Some(0.5), 1.0),
        row(StreptococcusPneumoniae, abx::LEVOFLOXACIN, 2.0, Some(4.0), 8.0),
        row(StreptococcusPneumoniae, abx::MOXIFLOXACIN, 1.0, Some(2.0), 4.0),
        row(StreptococcusPneumoniae, abx::LINEZOLID, 2.0, None, 4.0),
        row(StreptococcusPneumoniae, abx::TRIMETHOPRIM_SULFAMETHOXAZOLE, 0.5, Some(2.0), 4.0),
        row(StreptococcusPneumoniae, abx::DOXYCYCLINE, 0.25, Some(0.5), 1.0),
        site_row(StreptococcusPneumoniae, abx::PENICILLIN, sites::CNS, 0.06, None, 0.12),
        site_row(StreptococcusPneumoniae, abx::CEFTRIAXONE, sites::CNS, 0.5, Some(1.0), 2.0),
        site_row(StreptococcusPneumoniae, abx::CEFOTAXIME, sites::CNS, 0.5, Some(1.0), 2.0),
    ]
}
