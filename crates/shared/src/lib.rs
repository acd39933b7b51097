//! Shared errors, notation types, and configuration for moneytext.
//!
//! This crate provides the pieces used by every other crate:
//! - Parse error types
//! - Decimal separator and currency position notation
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{MoneyError, MoneyResult};
pub use types::{CurrencyPosition, DecimalSeparator};
