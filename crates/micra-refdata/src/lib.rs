//! micra-refdata
//!
//! The curated built-in reference dataset: CLSI-style breakpoint tables,
//! organism records, drug monographs, infection-site metadata, and
//! clinical annotations, plus the one-time asynchronous load boundary.
//!
//! Threshold values follow the CLSI M100 conventions for the covered
//! organism groups. The dataset is intentionally bounded; a deployment
//! with its own tables supplies a JSON bundle through
//! [`loader::ReferenceLoader::from_json`] instead.

pub mod annotations;
pub mod breakpoints;
pub mod drugs;
pub mod error;
pub mod loader;
pub mod organisms;
pub mod sites;

use micra_core::reference::{ReferenceBundle, ReferenceData};

use crate::error::RefdataError;

/// Assemble the embedded dataset as a serializable bundle.
pub fn bundle() -> ReferenceBundle {
    ReferenceBundle {
        organisms: organisms::records(),
        breakpoints: breakpoints::entries(),
        drugs: drugs::monographs(),
        sites: sites::records(),
        annotations: annotations::records(),
    }
}

/// Validate and index the embedded dataset synchronously. Most callers
/// should go through [`loader::ReferenceLoader`] instead.
pub fn reference_data() -> Result<ReferenceData, RefdataError> {
    Ok(ReferenceData::from_bundle(bundle())?)
}
