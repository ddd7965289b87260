//! Engine error types.
//!
//! All failures are local and synchronous: nothing here is retried.

use cards2cash_shared::AppError;
use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias using `EngineError`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised by the rate and tier resolution engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Caller supplied a negative amount, negative points or a malformed value.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No conversion table is configured for the carrier.
    #[error("Unknown carrier: {0}")]
    UnknownCarrier(String),

    /// No rate is configured for the ordered currency pair.
    #[error("Unsupported currency pair: {from} -> {to}")]
    UnsupportedCurrencyPair {
        /// Source currency code.
        from: String,
        /// Target currency code.
        to: String,
    },

    /// No rate was recorded for the pair on or before the requested date.
    #[error("No {from} -> {to} rate recorded on or before {date}")]
    RateUnavailable {
        /// Source currency code.
        from: String,
        /// Target currency code.
        to: String,
        /// Requested date.
        date: NaiveDate,
    },

    /// Table or tier data violates its invariants.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl EngineError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidInput(_) => Self::Validation(err.to_string()),
            EngineError::UnknownCarrier(_)
            | EngineError::UnsupportedCurrencyPair { .. }
            | EngineError::RateUnavailable { .. } => Self::NotSupported(err.to_string()),
            EngineError::Configuration(_) => Self::Configuration(err.to_string()),
        }
    }
}
