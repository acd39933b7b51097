//! Canonical currency symbols and the tokens that resolve to them.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use moneytext_shared::config::AliasConfig;

/// Built-in canonical symbols with their aliases.
///
/// Codes starting with `k` or `m` are absent: after a number the first letter
/// would be read as a magnitude suffix.
const BUILTIN_ALIASES: &[(&str, &[&str])] = &[
    ("$", &["$", "usd", "us$"]),
    ("€", &["€", "eur"]),
    ("£", &["£", "gbp"]),
    ("¥", &["¥", "jpy"]),
    ("₹", &["₹", "inr"]),
    ("₽", &["₽", "rub"]),
    ("₩", &["₩"]),
    ("₺", &["₺", "try"]),
    ("₪", &["₪", "ils"]),
    ("₫", &["₫", "vnd"]),
    ("฿", &["฿", "thb"]),
    ("₱", &["₱", "php"]),
    ("R$", &["r$", "brl"]),
    ("C$", &["c$", "cad"]),
    ("A$", &["a$", "aud"]),
    ("CHF", &["chf"]),
    ("zł", &["zł", "pln"]),
];

static BUILTIN: Lazy<CurrencyTable> = Lazy::new(|| {
    let mut table = CurrencyTable::empty();
    for (symbol, aliases) in BUILTIN_ALIASES {
        table.insert(symbol, aliases.iter().copied());
    }
    table
});

/// Immutable lookup from alias to canonical symbol.
///
/// Aliases are matched case-insensitively. A table is never modified once
/// built, so one instance can be shared freely between callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyTable {
    symbols: Vec<String>,
    index: HashMap<String, String>,
}

impl CurrencyTable {
    fn empty() -> Self {
        Self {
            symbols: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns the process-wide built-in table.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Builds a table holding the built-in aliases plus `extra`.
    ///
    /// An alias listed in `extra` takes precedence over a built-in alias with
    /// the same spelling. Each extra symbol also resolves to itself.
    #[must_use]
    pub fn with_aliases(extra: &[AliasConfig]) -> Self {
        let mut table = CurrencyTable::clone(&BUILTIN);
        for entry in extra {
            let aliases = std::iter::once(entry.symbol.as_str())
                .chain(entry.aliases.iter().map(String::as_str));
            table.insert(&entry.symbol, aliases);
        }
        debug!(
            extra = extra.len(),
            aliases = table.index.len(),
            "Built currency table"
        );
        table
    }

    fn insert<'a>(&mut self, symbol: &str, aliases: impl IntoIterator<Item = &'a str>) {
        if !self.symbols.iter().any(|known| known == symbol) {
            self.symbols.push(symbol.to_string());
        }
        for alias in aliases {
            let key = alias.trim().to_lowercase();
            if !key.is_empty() {
                self.index.insert(key, symbol.to_string());
            }
        }
    }

    /// Returns the canonical symbol for `alias`, if known.
    #[must_use]
    pub fn resolve(&self, alias: &str) -> Option<&str> {
        self.index
            .get(&alias.trim().to_lowercase())
            .map(String::as_str)
    }

    /// Returns true if `alias` resolves to a symbol.
    #[must_use]
    pub fn contains(&self, alias: &str) -> bool {
        self.resolve(alias).is_some()
    }

    /// Returns the canonical symbols in insertion order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }
}

impl Default for CurrencyTable {
    fn default() -> Self {
        CurrencyTable::clone(&BUILTIN)
    }
}
