use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid scoring weights: {0}")]
    InvalidWeights(String),

    #[error("reference data validation failed: {0}")]
    ReferenceValidation(String),

    #[error("unknown organism: {0}")]
    UnknownOrganism(String),

    #[error("unknown antibiotic: {0}")]
    UnknownAntibiotic(String),
}
