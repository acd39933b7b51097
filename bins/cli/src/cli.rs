//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use moneytext_shared::config::AppConfig;
use moneytext_shared::{CurrencyPosition, DecimalSeparator};

/// Reformat monetary amounts such as "USD 3.5M" or "3500000 €".
///
/// Each TEXT argument is parsed and printed on its own line. Without
/// arguments, every non-empty line of stdin is processed.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "moneytext", version, about)]
pub struct Args {
    /// Amounts to reformat.
    pub text: Vec<String>,

    /// Read and write `,` as the decimal separator.
    #[arg(long)]
    pub comma: bool,

    /// Write the currency before the quantity.
    #[arg(long)]
    pub before: bool,

    /// Keep unrecognized currency tokens instead of dropping them.
    #[arg(long)]
    pub keep_unknown: bool,

    /// Extra configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON.
    #[arg(long)]
    pub json_logs: bool,
}

/// Settings after applying command-line flags over configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub separator: DecimalSeparator,
    pub position: CurrencyPosition,
    pub keep_unknown_currency: bool,
}

impl Settings {
    /// Flags only ever switch a setting on; they never reset configuration.
    pub fn resolve(args: &Args, config: &AppConfig) -> Self {
        Self {
            separator: if args.comma {
                DecimalSeparator::Comma
            } else {
                config.format.decimal_separator
            },
            position: if args.before {
                CurrencyPosition::Before
            } else {
                config.format.currency_position
            },
            keep_unknown_currency: args.keep_unknown || config.parse.keep_unknown_currency,
        }
    }
}
