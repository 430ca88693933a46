//! Error taxonomy for the GridGuard core.
//!
//! Every variant aborts the current prediction. None of them is retried:
//! they come from configuration or input, not from transient conditions.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GridGuardError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridGuardError {
    /// Feature vector shape, order or layout does not match the trained model.
    #[error("Feature schema mismatch: {0}")]
    SchemaMismatch(String),

    /// Area type outside {Residential, Commercial, Industrial}.
    #[error("Unknown area type: '{0}'")]
    UnknownCategory(String),

    /// Model artifact failed to load or no model is available.
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// Model was loaded but the inference call failed.
    #[error("Inference failed: {0}")]
    Inference(String),

    /// Transformer capacity must be a positive, finite number of MW.
    #[error("Invalid transformer capacity: {0}")]
    InvalidCapacity(f64),
}

impl GridGuardError {
    /// Short machine-readable kind, used in logs and API bodies
    pub fn kind(&self) -> &'static str {
        match self {
            GridGuardError::SchemaMismatch(_) => "schema_mismatch",
            GridGuardError::UnknownCategory(_) => "unknown_category",
            GridGuardError::ModelUnavailable(_) => "model_unavailable",
            GridGuardError::Inference(_) => "inference",
            GridGuardError::InvalidCapacity(_) => "invalid_capacity",
        }
    }
}
