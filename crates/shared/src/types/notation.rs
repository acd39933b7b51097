//! How numbers and currencies are written.

use serde::{Deserialize, Serialize};

/// Character that separates the integer part from the fraction.
///
/// The other character of the pair is read as thousands grouping and
/// ignored when parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecimalSeparator {
    /// `3.5` (grouping with `,`)
    #[default]
    Dot,
    /// `3,5` (grouping with `.`)
    Comma,
}

impl DecimalSeparator {
    /// Returns the separator character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Dot => '.',
            Self::Comma => ',',
        }
    }

    /// Returns the grouping character stripped from input in this mode.
    #[must_use]
    pub const fn grouping(self) -> char {
        match self {
            Self::Dot => ',',
            Self::Comma => '.',
        }
    }
}

/// Where the currency is written relative to the quantity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyPosition {
    /// `3.5M $`
    #[default]
    After,
    /// `$3.5M`
    Before,
}

impl std::fmt::Display for DecimalSeparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dot => write!(f, "dot"),
            Self::Comma => write!(f, "comma"),
        }
    }
}

impl std::str::FromStr for DecimalSeparator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dot" | "." => Ok(Self::Dot),
            "comma" | "," => Ok(Self::Comma),
            _ => Err(format!("Unknown decimal separator: {s}")),
        }
    }
}

impl std::fmt::Display for CurrencyPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::After => write!(f, "after"),
            Self::Before => write!(f, "before"),
        }
    }
}

impl std::str::FromStr for CurrencyPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "after" => Ok(Self::After),
            "before" => Ok(Self::Before),
            _ => Err(format!("Unknown currency position: {s}")),
        }
    }
}
