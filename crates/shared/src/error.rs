//! Error types for amount parsing.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors returned when text cannot be read as an amount.
///
/// Parsing is all-or-nothing: either variant means no amount was produced.
/// An unrecognized currency token is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The text does not have the shape of an amount, or names a currency
    /// on both sides of the number.
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),

    /// The numeric part holds more than one decimal separator or does not
    /// convert to a finite number.
    #[error("Invalid number format: {0}")]
    InvalidNumber(String),
}

impl MoneyError {
    /// Returns the stable machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidFormat(_) => "INVALID_FORMAT",
            Self::InvalidNumber(_) => "INVALID_NUMBER",
        }
    }

    /// Returns the detail message carried by the error.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::InvalidFormat(detail) | Self::InvalidNumber(detail) => detail,
        }
    }
}
