//! Reference-data contracts: the static tables the engine consumes.
//!
//! The engine never loads these itself: an immutable [`ReferenceData`]
//! bundle is constructed once (see micra-refdata) and injected into the
//! pipeline. Construction validates the whole bundle and fails closed:
//! clinical correctness depends on complete breakpoint coverage, so a
//! partial table is an error, never a fallback.

pub mod breakpoint;
pub mod drug;
pub mod organism;
pub mod site;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::susceptibility::Interpretation;
use breakpoint::{Breakpoint, BreakpointEntry};
use drug::DrugMonograph;
use organism::{OrganismCategory, OrganismRecord};
use site::InfectionSite;

/// Curated clinical note for a well-known organism/antibiotic/
/// interpretation combination. Looked up, never inferred.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalAnnotation {
    pub organism_id: String,
    pub antibiotic: String,
    pub interpretation: Interpretation,
    pub note: String,
}

/// The serializable form of the full reference dataset, as loaded from
/// the embedded tables or an external JSON bundle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceBundle {
    pub organisms: Vec<OrganismRecord>,
    pub breakpoints: Vec<BreakpointEntry>,
    pub drugs: Vec<DrugMonograph>,
    pub sites: Vec<InfectionSite>,
    pub annotations: Vec<ClinicalAnnotation>,
}

/// Immutable, indexed reference data. Existence of a value of this type
/// implies the bundle passed validation.
#[derive(Debug)]
pub struct ReferenceData {
    organisms: HashMap<String, OrganismRecord>,
    systemic: HashMap<(OrganismCategory, String), Breakpoint>,
    site_specific: HashMap<(OrganismCategory, String, String), Breakpoint>,
    drugs: HashMap<String, DrugMonograph>,
    sites: HashMap<String, InfectionSite>,
    annotations: HashMap<(String, String, Interpretation), String>,
    entries: Vec<BreakpointEntry>,
}

impl ReferenceData {
    /// Index and validate a bundle. Any defect is fatal.
    pub fn from_bundle(bundle: ReferenceBundle) -> Result<Self, CoreError> {
        validate(&bundle)?;

        let mut organisms = HashMap::new();
        for o in &bundle.organisms {
            organisms.insert(o.id.clone(), o.clone());
        }

        let mut systemic = HashMap::new();
        let mut site_specific = HashMap::new();
        for e in &bundle.breakpoints {
            match &e.site {
                Some(site) => {
                    site_specific.insert(
                        (e.category, e.antibiotic.clone(), site.clone()),
                        e.breakpoint,
                    );
                }
                None => {
                    systemic.insert((e.category, e.antibiotic.clone()), e.breakpoint);
                }
            }
        }

        let mut drugs = HashMap::new();
        for d in &bundle.drugs {
            drugs.insert(d.id.clone(), d.clone());
        }

        let mut sites = HashMap::new();
        for s in &bundle.sites {
            sites.insert(s.id.clone(), s.clone());
        }

        let mut annotations = HashMap::new();
        for a in &bundle.annotations {
            annotations.insert(
                (a.organism_id.clone(), a.antibiotic.clone(), a.interpretation),
                a.note.clone(),
            );
        }

        Ok(Self {
            organisms,
            systemic,
            site_specific,
            drugs,
            sites,
            annotations,
            entries: bundle.breakpoints,
        })
    }

    pub fn organism(&self, id: &str) -> Option<&OrganismRecord> {
        self.organisms.get(id)
    }

    pub fn monograph(&self, antibiotic: &str) -> Option<&DrugMonograph> {
        self.drugs.get(antibiotic)
    }

    pub fn site(&self, id: &str) -> Option<&InfectionSite> {
        self.sites.get(id)
    }

    /// Site-specific breakpoint when one exists for this triple, otherwise
    /// the systemic breakpoint.
    pub fn breakpoint(
        &self,
        category: OrganismCategory,
        antibiotic: &str,
        site: Option<&str>,
    ) -> Option<&Breakpoint> {
        if let Some(site_id) = site
            && let Some(bp) = self.site_specific.get(&(
                category,
                antibiotic.to_string(),
                site_id.to_string(),
            ))
        {
            return Some(bp);
        }
        self.systemic.get(&(category, antibiotic.to_string()))
    }

    pub fn annotation(
        &self,
        organism_id: &str,
        antibiotic: &str,
        interpretation: Interpretation,
    ) -> Option<&str> {
        self.annotations
            .get(&(
                organism_id.to_string(),
                antibiotic.to_string(),
                interpretation,
            ))
            .map(String::as_str)
    }

    /// Every breakpoint entry, for table-wide property checks.
    pub fn breakpoint_entries(&self) -> &[BreakpointEntry] {
        &self.entries
    }

    pub fn organisms(&self) -> impl Iterator<Item = &OrganismRecord> {
        self.organisms.values()
    }

    pub fn monographs(&self) -> impl Iterator<Item = &DrugMonograph> {
        self.drugs.values()
    }
}

fn validate(bundle: &ReferenceBundle) -> Result<(), CoreError> {
    if bundle.organisms.is_empty() {
        return Err(CoreError::ReferenceValidation(
            "organism table is empty".to_string(),
        ));
    }
    if bundle.breakpoints.is_empty() {
        return Err(CoreError::ReferenceValidation(
            "breakpoint table is empty".to_string(),
        ));
    }
    if bundle.drugs.is_empty() {
        return Err(CoreError::ReferenceValidation(
            "drug monograph table is empty".to_string(),
        ));
    }
    if bundle.sites.is_empty() {
        return Err(CoreError::ReferenceValidation(
            "infection site table is empty".to_string(),
        ));
    }

    for e in &bundle.breakpoints {
        if !e.breakpoint.is_monotonic() {
            return Err(CoreError::ReferenceValidation(format!(
                "non-monotonic breakpoint for {:?}/{}",
                e.category, e.antibiotic
            )));
        }
    }

    let drug_ids: std::collections::HashSet<&str> =
        bundle.drugs.iter().map(|d| d.id.as_str()).collect();

    for o in &bundle.organisms {
        for abx in &o.intrinsic_resistance {
            if !drug_ids.contains(abx.as_str()) {
                return Err(CoreError::ReferenceValidation(format!(
                    "organism {} lists unknown intrinsic-resistance drug {abx}",
                    o.id
                )));
            }
        }
    }

    for s in &bundle.sites {
        for abx in &s.ineffective_agents {
            if !drug_ids.contains(abx.as_str()) {
                return Err(CoreError::ReferenceValidation(format!(
                    "site {} lists unknown ineffective agent {abx}",
                    s.id
                )));
            }
        }
    }

    Ok(())
}
