//! Reformatting loop.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use moneytext_core::{FormatOptions, Parser};

use crate::cli::Settings;

/// Outcome of a reformatting run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub processed: usize,
    pub failed: usize,
}

/// Parses every input and writes one formatted amount per line to `out`.
///
/// Inputs that fail to parse are logged and counted; they produce no output
/// line.
pub fn reformat<I, W>(
    parser: &Parser<'_>,
    settings: Settings,
    inputs: I,
    out: &mut W,
) -> anyhow::Result<Summary>
where
    I: IntoIterator<Item = String>,
    W: Write,
{
    let options = FormatOptions::new(settings.separator, settings.position);
    let mut summary = Summary::default();

    for input in inputs {
        summary.processed += 1;
        match parser.parse(&input) {
            Ok(amount) => {
                debug!(
                    input = %input,
                    quantity = amount.quantity(),
                    currency = amount.currency(),
                    "Parsed amount"
                );
                writeln!(out, "{}", amount.format_with(options))?;
            }
            Err(e) => {
                warn!(input = %input, code = e.error_code(), "{e}");
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// Collects the non-empty lines of `reader`.
pub fn read_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    reader
        .lines()
        .filter(|line| !matches!(line, Ok(line) if line.trim().is_empty()))
        .collect()
}
