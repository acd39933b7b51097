//! The textual shape of an amount.

use once_cell::sync::Lazy;
use regex::Regex;

/// `[prefix] number [mm|m|k] [suffix]`, matched against normalized text.
///
/// `mm` is listed before `m` so `6mm` reads as one suffix token rather than
/// `m` followed by a stray `m` currency.
static AMOUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^0-9 ]*) *([0-9][0-9,.]*) *(mm|m|k)? *([^0-9]*)$")
        .expect("amount pattern is a valid regex")
});

/// The four pieces of a matched amount, borrowed from the normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AmountParts<'t> {
    /// Non-numeric token before the number.
    pub prefix: &'t str,
    /// Digits with separators.
    pub number: &'t str,
    /// Magnitude token, empty when absent.
    pub magnitude: &'t str,
    /// Non-numeric token after the number.
    pub suffix: &'t str,
}

impl<'t> AmountParts<'t> {
    /// Splits `text` into its parts, or `None` if it is not shaped like an amount.
    pub(crate) fn split(text: &'t str) -> Option<Self> {
        let captures = AMOUNT_PATTERN.captures(text)?;
        let group = |index| captures.get(index).map_or("", |m| m.as_str());

        Some(Self {
            prefix: group(1),
            number: group(2),
            magnitude: group(3),
            suffix: group(4),
        })
    }

    /// Returns the currency token from whichever side holds one.
    pub(crate) fn currency_token(&self) -> &'t str {
        if self.prefix.is_empty() {
            self.suffix
        } else {
            self.prefix
        }
    }
}
