//! Reading amounts from free-form text.
//!
//! Accepted input is `[currency] number [k|m|mm] [currency]` with optional
//! spaces between the pieces. Currency and magnitude tokens are
//! case-insensitive. The grouping character (`,` in dot mode, `.` in comma
//! mode) is dropped before matching.
//!
//! Validation order:
//! 1. The text must match the amount shape.
//! 2. A currency may appear on one side only.
//! 3. The number may hold at most one decimal separator.
//! 4. The number must convert to a finite value after scaling.
//!
//! An unrecognized currency token is not an error; it yields an empty
//! currency unless the parser keeps unknown tokens.

mod pattern;

#[cfg(test)]
mod props;

use tracing::trace;

use moneytext_shared::{DecimalSeparator, MoneyError, MoneyResult};

use crate::amount::{Amount, Magnitude};
use crate::currency::CurrencyTable;

use pattern::AmountParts;

/// Parses `text` with `.` as the decimal separator and `,` as grouping.
///
/// # Example
///
/// ```
/// use moneytext_core::parse;
///
/// let amount = parse("USD 3,500,000").unwrap();
/// assert_eq!(amount.quantity(), 3_500_000.0);
/// assert_eq!(amount.currency(), "$");
/// ```
pub fn parse(text: &str) -> MoneyResult<Amount> {
    Parser::new(DecimalSeparator::Dot).parse(text)
}

/// Parses `text` with `,` as the decimal separator and `.` as grouping.
///
/// # Example
///
/// ```
/// use moneytext_core::parse_comma;
///
/// let amount = parse_comma("3,5M€").unwrap();
/// assert_eq!(amount.to_string(), "3.5M €");
/// ```
pub fn parse_comma(text: &str) -> MoneyResult<Amount> {
    Parser::new(DecimalSeparator::Comma).parse(text)
}

/// Amount parser bound to a decimal separator and a currency table.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'a> {
    separator: DecimalSeparator,
    table: &'a CurrencyTable,
    keep_unknown_currency: bool,
}

impl Parser<'static> {
    /// Creates a parser using the built-in currency table.
    #[must_use]
    pub fn new(separator: DecimalSeparator) -> Self {
        Self::with_table(separator, CurrencyTable::builtin())
    }
}

impl<'a> Parser<'a> {
    /// Creates a parser resolving currencies through `table`.
    #[must_use]
    pub const fn with_table(separator: DecimalSeparator, table: &'a CurrencyTable) -> Self {
        Self {
            separator,
            table,
            keep_unknown_currency: false,
        }
    }

    /// Keeps unrecognized currency tokens (lowercased) instead of dropping them.
    #[must_use]
    pub const fn keep_unknown_currency(mut self, keep: bool) -> Self {
        self.keep_unknown_currency = keep;
        self
    }

    /// Returns the decimal separator this parser reads.
    #[must_use]
    pub const fn separator(&self) -> DecimalSeparator {
        self.separator
    }

    /// Parses `text` into an amount.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidFormat`] if the text is not shaped like an
    /// amount or has a currency on both sides, and
    /// [`MoneyError::InvalidNumber`] if the number has several decimal
    /// separators or is out of range.
    pub fn parse(&self, text: &str) -> MoneyResult<Amount> {
        let normalized = text
            .replace(self.separator.grouping(), "")
            .trim()
            .to_lowercase();

        let parts = AmountParts::split(&normalized).ok_or_else(|| {
            MoneyError::InvalidFormat(format!("`{text}` is not shaped like an amount"))
        })?;

        if !parts.prefix.is_empty() && !parts.suffix.is_empty() {
            return Err(MoneyError::InvalidFormat(format!(
                "`{text}` has a currency on both sides"
            )));
        }

        let magnitude = Magnitude::from_token(parts.magnitude);
        let quantity = self.quantity(parts.number)? * magnitude.multiplier();
        if !quantity.is_finite() {
            return Err(MoneyError::InvalidNumber(format!("`{text}` is out of range")));
        }

        let currency = self.currency(parts.currency_token());
        Ok(Amount::new(quantity, currency))
    }

    fn quantity(&self, number: &str) -> MoneyResult<f64> {
        let separator = self.separator.as_char();
        if number.matches(separator).count() > 1 {
            return Err(MoneyError::InvalidNumber(format!(
                "`{number}` has more than one `{separator}`"
            )));
        }

        let literal = match self.separator {
            DecimalSeparator::Dot => number.to_string(),
            DecimalSeparator::Comma => number.replace(',', "."),
        };

        let value: f64 = literal
            .parse()
            .map_err(|e| MoneyError::InvalidNumber(format!("`{number}`: {e}")))?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(MoneyError::InvalidNumber(format!("`{number}` is out of range")))
        }
    }

    fn currency(&self, token: &str) -> String {
        if token.is_empty() {
            return String::new();
        }
        match self.table.resolve(token) {
            Some(symbol) => symbol.to_string(),
            None if self.keep_unknown_currency => {
                trace!(token, "Keeping unrecognized currency token");
                token.to_string()
            }
            None => {
                trace!(token, "Dropping unrecognized currency token");
                String::new()
            }
        }
    }
}
