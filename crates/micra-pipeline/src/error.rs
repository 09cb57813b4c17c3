use thiserror::Error;

use micra_core::error::CoreError;
use micra_refdata::error::RefdataError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid pipeline configuration: {0}")]
    Config(#[from] CoreError),

    #[error("reference data unavailable: {0}")]
    Reference(#[from] RefdataError),
}
