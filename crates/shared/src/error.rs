//! Application-wide error types.
//!
//! The presentation layer only ever sees [`AppError`]. Every calculation
//! failure renders the same generic message; the error code tells callers
//! which kind of failure occurred.

use thiserror::Error;

/// Message shown to users when a calculation cannot be completed.
pub const UNABLE_TO_CALCULATE: &str = "Unable to calculate. Please check your input and try again.";

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller supplied an invalid value (e.g. a negative amount).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Requested carrier or currency pair is not offered.
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// Rate tables failed validation.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotSupported(_) => "NOT_SUPPORTED",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Returns the message to render to the end user.
    ///
    /// Details stay in logs; users get the generic "unable to calculate" text.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        UNABLE_TO_CALCULATE
    }

    /// Returns true if the failure is fatal to start-up.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::Validation(String::new()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            AppError::NotSupported(String::new()).error_code(),
            "NOT_SUPPORTED"
        );
        assert_eq!(
            AppError::Configuration(String::new()).error_code(),
            "CONFIGURATION_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Validation("msg".into()).to_string(),
            "Validation error: msg"
        );
        assert_eq!(
            AppError::NotSupported("msg".into()).to_string(),
            "Not supported: msg"
        );
        assert_eq!(
            AppError::Configuration("msg".into()).to_string(),
            "Configuration error: msg"
        );
    }

    #[test]
    fn test_user_message_is_generic() {
        let errors = [
            AppError::Validation("negative amount".into()),
            AppError::NotSupported("carrier".into()),
            AppError::Configuration("empty table".into()),
        ];
        for err in errors {
            assert_eq!(err.user_message(), UNABLE_TO_CALCULATE);
        }
    }

    #[test]
    fn test_only_configuration_is_fatal() {
        assert!(AppError::Configuration(String::new()).is_fatal());
        assert!(!AppError::Validation(String::new()).is_fatal());
        assert!(!AppError::NotSupported(String::new()).is_fatal());
    }
}
