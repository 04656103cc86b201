//! Catalogue listing command.

use crate::config::{self, OutputFormat};
use crate::error::CliError;
use crate::formatters::format_rule_entry;
use std::io::Write;
use yahtzee_engine::catalogue::CATALOGUE;

/// Handle the rules command: print every catalogue entry with its variant,
/// parameter and description.
pub fn handle_rules_command(
    format: Option<OutputFormat>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let format = match format {
        Some(f) => f,
        None => config::load()?.format,
    };
    match format {
        OutputFormat::Text => {
            for entry in CATALOGUE.iter() {
                writeln!(out, "{}", format_rule_entry(entry))?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&CATALOGUE[..])?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_lists_thirteen_rules() {
        let mut out = Vec::new();
        handle_rules_command(Some(OutputFormat::Text), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.lines().count(), 13);
        assert!(output.lines().next().unwrap().starts_with("ones"));
        assert!(output.contains("Sum of all dice"));
    }

    #[test]
    fn json_carries_rule_configuration() {
        let mut out = Vec::new();
        handle_rules_command(Some(OutputFormat::Json), &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 13);
        assert_eq!(entries[0]["rule"]["target_value"], 1);
        assert_eq!(entries[8]["category"], "full-house");
        assert_eq!(entries[8]["rule"]["flat_score"], 25);
        assert_eq!(entries[12]["rule"]["required_count"], 0);
    }
}
