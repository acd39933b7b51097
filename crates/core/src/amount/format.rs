//! Rendering amounts as short human-readable strings.
//!
//! The quantity is scaled to its magnitude bucket, rounded to two decimals,
//! and stripped of trailing zeros:
//!
//! - `3500000 €` renders as `3.5M €`
//! - `35000 $` renders as `35K $`
//! - `500` renders as `500`

use moneytext_shared::{CurrencyPosition, DecimalSeparator};
use moneytext_shared::config::FormatConfig;

use super::{Amount, Magnitude};

/// Output notation for [`Amount::format_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Decimal separator written in the quantity.
    pub separator: DecimalSeparator,
    /// Placement of the currency symbol.
    pub position: CurrencyPosition,
}

impl FormatOptions {
    /// Creates options from a separator and a currency position.
    #[must_use]
    pub const fn new(separator: DecimalSeparator, position: CurrencyPosition) -> Self {
        Self {
            separator,
            position,
        }
    }
}

impl From<FormatConfig> for FormatOptions {
    fn from(config: FormatConfig) -> Self {
        Self::new(config.decimal_separator, config.currency_position)
    }
}

/// Rounds `value` to two decimals and drops trailing zeros and a bare point.
///
/// Rounding follows the float formatter, so `100.005` (stored just below the
/// midpoint) gives `"100"` while `100.006` gives `"100.01"`. Negative zero,
/// including values that round to it, renders as `"0"`.
#[must_use]
pub fn trim_decimal(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

impl Amount {
    /// Renders with `,` as the decimal separator: `3,5M €`.
    #[must_use]
    pub fn to_string_comma(&self) -> String {
        self.format_with(FormatOptions::new(
            DecimalSeparator::Comma,
            CurrencyPosition::After,
        ))
    }

    /// Renders with the currency in front and no space: `$3.5M`.
    #[must_use]
    pub fn to_string_before(&self) -> String {
        self.format_with(FormatOptions::new(
            DecimalSeparator::Dot,
            CurrencyPosition::Before,
        ))
    }

    /// Renders with the given notation.
    #[must_use]
    pub fn format_with(&self, options: FormatOptions) -> String {
        let rendered = self.to_string();
        let placed = match options.position {
            CurrencyPosition::After => rendered,
            CurrencyPosition::Before => match rendered.split_once(' ') {
                Some((quantity, currency)) => format!("{currency}{quantity}"),
                None => rendered,
            },
        };

        match options.separator {
            DecimalSeparator::Dot => placed,
            DecimalSeparator::Comma => placed.replace('.', ","),
        }
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let magnitude = Magnitude::for_quantity(self.quantity);
        let scaled = self.quantity / magnitude.multiplier();
        write!(f, "{}{}", trim_decimal(scaled), magnitude.suffix())?;
        if self.has_currency() {
            write!(f, " {}", self.currency)?;
        }
        Ok(())
    }
}
