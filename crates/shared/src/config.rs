//! Application configuration management.

use std::path::Path;

use serde::Deserialize;

use crate::types::{CurrencyPosition, DecimalSeparator};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output notation.
    pub format: FormatConfig,
    /// Parser behavior.
    pub parse: ParseConfig,
    /// Currency alias extensions.
    pub currency: CurrencyConfig,
}

/// Notation used for both reading and writing amounts.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Decimal separator; the other character is treated as grouping.
    pub decimal_separator: DecimalSeparator,
    /// Currency placement in rendered output.
    pub currency_position: CurrencyPosition,
}

/// Parser configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Keep unrecognized currency tokens verbatim instead of dropping them.
    pub keep_unknown_currency: bool,
}

/// Currency alias configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    /// Extra aliases layered over the built-in table.
    pub aliases: Vec<AliasConfig>,
}

/// One canonical symbol and the tokens that resolve to it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AliasConfig {
    /// Canonical symbol written in output (e.g. "CHF").
    pub symbol: String,
    /// Input tokens matched case-insensitively.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl AppConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Loads configuration, additionally reading `path` when given.
    ///
    /// Sources in increasing priority: `config/default`, `config/{RUN_MODE}`,
    /// `path`, then `MONEYTEXT__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` cannot be read or a value has the wrong type.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false));

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("MONEYTEXT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
