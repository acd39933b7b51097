//! Notation types shared by configuration and formatting.

pub mod notation;

pub use notation::{CurrencyPosition, DecimalSeparator};
