//! # Yahtzee CLI Library
//!
//! Command-line harness around `yahtzee-engine`: score a roll, list the rule
//! catalogue, inspect configuration.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments, dispatches to a command handler and returns the
//! process exit code. Output streams are injected so the whole CLI can be
//! driven from tests.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let args = ["yahtzee", "score", "--dice", "3,3,3,5,5", "--rule", "fullHouse"];
//! let code = yahtzee_cli::run(args, &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("25"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `score --dice D [--rule R] [--format text|json]`: score a roll
//! - `rules [--format text|json]`: list the thirteen rules
//! - `cfg`: display configuration values and their sources

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, YahtzeeCli};
use commands::{handle_cfg_command, handle_rules_command, handle_score_command};

pub use config::OutputFormat;
pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for any error (bad arguments, invalid
/// roll, unknown rule, bad configuration).
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["score", "rules", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match YahtzeeCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: yahtzee <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Score { dice, rule, format } => {
            handle_score_command(&dice, rule.as_deref(), format, out)
        }
        Commands::Rules { format } => handle_rules_command(format, out),
        Commands::Cfg => return finish(handle_cfg_command(out, err), None),
    };
    finish(result, Some(err))
}

/// Map a handler result to an exit code, reporting the error when `err` is given.
fn finish(result: Result<(), CliError>, err: Option<&mut dyn Write>) -> i32 {
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            if let Some(err) = err {
                write_or_exit!(err, "Error: {}", e);
            }
            exit_code::ERROR
        }
    }
}
