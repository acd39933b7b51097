//! The amount value and its rendering.
//!
//! An [`Amount`] pairs a floating-point quantity with a canonical currency
//! symbol. The symbol is empty when no currency was given or recognized.

pub mod format;
pub mod magnitude;

#[cfg(test)]
mod format_props;

pub use format::{FormatOptions, trim_decimal};
pub use magnitude::Magnitude;

use serde::{Deserialize, Serialize};

use moneytext_shared::MoneyError;

/// A quantity of money with an optional currency.
///
/// Amounts are plain values: they are built once and never change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    quantity: f64,
    currency: String,
}

impl Amount {
    /// Creates an amount from a quantity and a currency symbol.
    ///
    /// The currency is stored as given; pass an empty string for none.
    #[must_use]
    pub fn new(quantity: f64, currency: impl Into<String>) -> Self {
        Self {
            quantity,
            currency: currency.into(),
        }
    }

    /// Returns the quantity.
    #[must_use]
    pub const fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Returns the currency symbol, empty when absent.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns true if the amount carries a currency.
    #[must_use]
    pub fn has_currency(&self) -> bool {
        !self.currency.is_empty()
    }
}

impl std::str::FromStr for Amount {
    type Err = MoneyError;

    /// Parses with `.` as the decimal separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}
