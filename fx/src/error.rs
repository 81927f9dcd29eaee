//! FX engine error types.

use ratebridge_common::Currency;
use thiserror::Error;

/// Errors that can occur while fetching or resolving rates.
#[derive(Debug, Error)]
pub enum FxError {
    /// Observation is missing a currency identifier.
    #[error("rate must have from and to currencies (got '{from}' -> '{to}')")]
    MalformedObservation { from: Currency, to: Currency },

    /// Observation carries a zero, negative or non-finite rate.
    #[error("rate from {from} to {to} must be positive, got {rate}")]
    InvalidRate { from: Currency, to: Currency, rate: f64 },

    /// Anchor currency does not appear in any observation.
    #[error("currency {0} not present in rates graph")]
    AnchorAbsent(Currency),

    /// Nothing besides the anchor could be resolved.
    #[error("no conversions to USD could be computed")]
    NoConvertibleCurrencies,

    /// Zero or non-finite edge met during traversal.
    #[error("invalid rate detected on edge {from} -> {to}")]
    InvalidEdgeWeight { from: Currency, to: Currency },

    /// Rate provider failed to deliver observations.
    #[error("rate provider error: {0}")]
    Provider(String),
}

impl FxError {
    /// Whether the failure originated upstream rather than in resolution.
    pub fn is_upstream(&self) -> bool {
        matches!(self, FxError::Provider(_))
    }

    /// Stable error code for logs and clients.
    pub fn error_code(&self) -> &'static str {
        match self {
            FxError::MalformedObservation { .. } => "MALFORMED_OBSERVATION",
            FxError::InvalidRate { .. } => "INVALID_RATE",
            FxError::AnchorAbsent(_) => "ANCHOR_ABSENT",
            FxError::NoConvertibleCurrencies => "NO_CONVERTIBLE_CURRENCIES",
            FxError::InvalidEdgeWeight { .. } => "INVALID_EDGE_WEIGHT",
            FxError::Provider(_) => "PROVIDER_ERROR",
        }
    }
}

impl From<reqwest::Error> for FxError {
    fn from(err: reqwest::Error) -> Self {
        FxError::Provider(err.to_string())
    }
}

/// Result type for FX operations.
pub type FxResult<T> = Result<T, FxError>;
