//! moneytext command-line tool
//!
//! Reads amounts from arguments or stdin and prints them in short form.

mod app;
mod cli;

use std::io;

use anyhow::Context;
use clap::Parser as _;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use moneytext_core::{CurrencyTable, Parser};
use moneytext_shared::AppConfig;

use crate::cli::{Args, Settings};

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "moneytext=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(args.json_logs);

    let config =
        AppConfig::load_from(args.config.as_deref()).context("Failed to load configuration")?;
    let settings = Settings::resolve(&args, &config);
    info!(
        separator = %settings.separator,
        position = %settings.position,
        extra_aliases = config.currency.aliases.len(),
        "Configuration loaded"
    );

    let table = CurrencyTable::with_aliases(&config.currency.aliases);
    let parser = Parser::with_table(settings.separator, &table)
        .keep_unknown_currency(settings.keep_unknown_currency);

    let inputs = if args.text.is_empty() {
        app::read_lines(io::stdin().lock()).context("Failed to read stdin")?
    } else {
        args.text
    };

    let summary = app::reformat(&parser, settings, inputs, &mut io::stdout().lock())?;
    if summary.failed > 0 {
        anyhow::bail!(
            "{} of {} inputs could not be parsed",
            summary.failed,
            summary.processed
        );
    }

    Ok(())
}
