//! One-time asynchronous load boundary for reference data.
//!
//! The pipeline accepts requests only after this load completes.
//! Concurrent callers share a single in-flight initialization; a failed
//! load leaves the loader unloaded so every downstream construction fails
//! closed instead of running on an empty table.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::info;

use micra_core::reference::{ReferenceBundle, ReferenceData};

use crate::error::RefdataError;

enum BundleSource {
    Embedded,
    Json(Vec<u8>),
}

pub struct ReferenceLoader {
    source: BundleSource,
    cell: OnceCell<Arc<ReferenceData>>,
}

impl ReferenceLoader {
    /// Loader backed by the built-in curated tables.
    pub fn embedded() -> Self {
        Self {
            source: BundleSource::Embedded,
            cell: OnceCell::new(),
        }
    }

    /// Loader backed by an externally supplied JSON bundle.
    pub fn from_json(bytes: Vec<u8>) -> Self {
        Self {
            source: BundleSource::Json(bytes),
            cell: OnceCell::new(),
        }
    }

    /// Idempotent load. The first caller performs the parse/validate/index
    /// work; concurrent callers await that same initialization and every
    /// later call returns the cached bundle.
    pub async fn get_or_load(&self) -> Result<Arc<ReferenceData>, RefdataError> {
        self.cell
            .get_or_try_init(|| async {
                let bundle = match &self.source {
                    BundleSource::Embedded => crate::bundle(),
                    BundleSource::Json(bytes) => {
                        serde_json::from_slice::<ReferenceBundle>(bytes)?
                    }
                };
                let n_organisms = bundle.organisms.len();
                let n_breakpoints = bundle.breakpoints.len();
                let n_drugs = bundle.drugs.len();
                let data = ReferenceData::from_bundle(bundle)?;
                info!(n_organisms, n_breakpoints, n_drugs, "reference data loaded");
                Ok(Arc::new(data))
            })
            .await
            .cloned()
    }

    /// The already-loaded data, if initialization has completed.
    pub fn try_get(&self) -> Option<Arc<ReferenceData>> {
        self.cell.get().cloned()
    }
}
