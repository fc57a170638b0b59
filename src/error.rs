use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised outside the simulation engine itself.
///
/// The engine never fails: degenerate inputs come back as flagged results.
/// These variants cover parsing user input, loading input files and
/// validating sweep ranges.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("unknown asset type '{0}' (expected 'vehicle' or 'real-estate')")]
    UnknownAssetType(String),

    #[error("unknown sweep path '{0}' (expected 'loan' or 'credit-letter')")]
    UnknownSweepPath(String),

    #[error("invalid amount for {field}: '{value}'")]
    InvalidAmount { field: String, value: String },

    #[error("invalid sweep: {reason} (from {from}, to {to}, step {step})")]
    InvalidSweep {
        reason: String,
        from: Decimal,
        to: Decimal,
        step: Decimal,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
