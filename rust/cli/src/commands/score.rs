//! Roll scoring command.
//!
//! Scores a roll under one named rule, or under all thirteen when no rule is
//! given, and prints the result as text or JSON.

use crate::config::{self, OutputFormat};
use crate::error::CliError;
use crate::formatters::{format_score, format_scorecard};
use crate::validation::parse_dice;
use std::io::Write;
use yahtzee_engine::engine::{score, score_all_values};

/// Handle the score command.
///
/// # Arguments
///
/// * `dice` - Raw dice argument, comma and/or whitespace separated
/// * `rule` - Catalogue name to score under; `None` scores every category
/// * `format` - Output format override; falls back to the configured format
/// * `out` - Output stream for results
///
/// # Errors
///
/// Returns `CliError::InvalidInput` for unparsable dice, a malformed roll or
/// an unknown rule, and `CliError::Config` if configuration cannot be loaded.
pub fn handle_score_command(
    dice: &str,
    rule: Option<&str>,
    format: Option<OutputFormat>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let format = format.unwrap_or(cfg.format);
    let values = parse_dice(dice)?;

    match rule {
        Some(name) => {
            let s = score(name, &values)?;
            match format {
                OutputFormat::Text => writeln!(out, "{}", format_score(&s))?,
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&s)?)?,
            }
        }
        None => {
            let card = score_all_values(&values)?;
            match format {
                OutputFormat::Text => {
                    writeln!(out, "{}", format_scorecard(&card, cfg.show_zero))?
                }
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&card)?)?,
            }
        }
    }
    Ok(())
}
