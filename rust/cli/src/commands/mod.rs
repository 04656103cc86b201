//! Command handler modules for the yahtzee CLI.
//!
//! Each command lives in its own module with the same shape:
//!
//! - Public handler: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in, never taken from the process
//! - Errors propagated via `CliError`

mod cfg;
mod rules;
mod score;

pub use cfg::handle_cfg_command;
pub use rules::handle_rules_command;
pub use score::handle_score_command;
