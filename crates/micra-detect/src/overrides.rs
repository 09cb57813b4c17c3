//! Interpretation override resolution.
//!
//! Overrides apply only from patterns whose detector set `detected:
//! true`, and only when the antibiotic's current interpretation matches
//! the rule exactly. The exact-match guard makes resolution idempotent:
//! re-running it over an already-overridden panel changes nothing.

use micra_core::models::overrides::InterpretationChange;
use micra_core::models::pattern::ResistancePattern;
use micra_core::models::susceptibility::{SusceptibilityPanel, SusceptibilityResult};

/// The overridden panel plus the audit trail of every applied change.
#[derive(Debug, Clone)]
pub struct OverrideOutcome {
    pub panel: SusceptibilityPanel,
    pub changes: Vec<InterpretationChange>,
}

pub fn apply_overrides(
    panel: &SusceptibilityPanel,
    patterns: &[ResistancePattern],
) -> OverrideOutcome {
    let mut results: Vec<SusceptibilityResult> = panel.results.clone();
    let mut changes = Vec::new();

    for pattern in patterns.iter().filter(|p| p.detected) {
        for rule in &pattern.override_rules {
            if let Some(result) = results.iter_mut().find(|r| r.antibiotic == rule.antibiotic)
                && result.interpretation == rule.current
            {
                let old = result.interpretation;
                result.interpretation = rule.new;
                result.note = Some(rule.reason.clone());
                changes.push(InterpretationChange {
                    antibiotic: rule.antibiotic.clone(),
                    old,
                    new: rule.new,
                    reason: rule.reason.clone(),
                });
            }
        }
    }

    OverrideOutcome {
        panel: SusceptibilityPanel::new(results),
        changes,
    }
}
