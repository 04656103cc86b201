//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] maps
//! an `Err` to exit code 2 after printing it to stderr.

use std::fmt;

use yahtzee_engine::errors::ScoreError;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, config file reads)
    Io(std::io::Error),

    /// Invalid user input: unparsable dice, malformed roll, unknown rule
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Output could not be encoded
    Encode(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Encode(msg) => write!(f, "Encoding error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<ScoreError> for CliError {
    fn from(error: ScoreError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        CliError::Encode(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_errors_become_invalid_input() {
        let err: CliError = ScoreError::UnknownRule("pair".into()).into();
        assert_eq!(err.to_string(), "Invalid input: Unknown rule: pair");

        let err: CliError = ScoreError::InvalidRollLength {
            expected: 5,
            actual: 3,
        }
        .into();
        assert!(matches!(err, CliError::InvalidInput(ref m) if m.contains("expected 5 dice")));
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error;
        let err = CliError::from(std::io::Error::other("pipe closed"));
        assert!(err.source().is_some());
    }
}
