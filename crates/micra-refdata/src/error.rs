use thiserror::Error;

use micra_core::error::CoreError;

#[derive(Debug, Error)]
pub enum RefdataError {
    #[error("invalid reference bundle: {0}")]
    Invalid(#[from] CoreError),

    #[error("bundle parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
