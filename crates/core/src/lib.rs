//! Amount parsing and formatting for moneytext.
//!
//! This crate turns free-form text such as `"USD 3.5M"`, `"3500000 €"` or
//! `"3,5M€"` into an [`Amount`] and renders amounts back with K/M magnitude
//! suffixes. It performs no I/O.
//!
//! # Modules
//!
//! - `amount` - The amount value, magnitude buckets, and rendering
//! - `currency` - Canonical currency symbols and their aliases
//! - `parser` - Text to amount conversion
//!
//! ```
//! use moneytext_core::parse;
//!
//! let amount = parse("USD 35k").unwrap();
//! assert_eq!(amount.to_string(), "35K $");
//! assert_eq!(amount.to_string_before(), "$35K");
//! ```

pub mod amount;
pub mod currency;
pub mod parser;

pub use amount::{Amount, FormatOptions, Magnitude, trim_decimal};
pub use currency::CurrencyTable;
pub use moneytext_shared::{CurrencyPosition, DecimalSeparator, MoneyError, MoneyResult};
pub use parser::{Parser, parse, parse_comma};
