//! Magnitude buckets shared by parsing and rendering.

/// Scale applied to a written number: none, thousands (`K`) or millions (`M`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Magnitude {
    /// No scaling.
    #[default]
    Unit,
    /// ×1,000, written `K`.
    Thousand,
    /// ×1,000,000, written `M`.
    Million,
}

impl Magnitude {
    /// Reads a lowercase input suffix token.
    ///
    /// `k` is thousands; both `m` and `mm` are millions. Anything else,
    /// including an absent token, is [`Magnitude::Unit`].
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "m" | "mm" => Self::Million,
            "k" => Self::Thousand,
            _ => Self::Unit,
        }
    }

    /// Picks the bucket used to render `quantity`.
    #[must_use]
    pub fn for_quantity(quantity: f64) -> Self {
        if quantity >= Self::Million.multiplier() {
            Self::Million
        } else if quantity >= Self::Thousand.multiplier() {
            Self::Thousand
        } else {
            Self::Unit
        }
    }

    /// Returns the factor this magnitude stands for.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Unit => 1.0,
            Self::Thousand => 1_000.0,
            Self::Million => 1_000_000.0,
        }
    }

    /// Returns the suffix written after a scaled quantity.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Unit => "",
            Self::Thousand => "K",
            Self::Million => "M",
        }
    }
}
