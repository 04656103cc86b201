use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("Invalid roll: expected {expected} dice, got {actual}")]
    InvalidRollLength { expected: usize, actual: usize },
    #[error("Invalid roll: die at position {position} shows {value}, must be 1-6")]
    InvalidRollValue { position: usize, value: u8 },
    #[error("Unknown rule: {0}")]
    UnknownRule(String),
}

impl ScoreError {
    /// True for both shapes of a malformed roll.
    pub fn is_invalid_roll(&self) -> bool {
        matches!(
            self,
            ScoreError::InvalidRollLength { .. } | ScoreError::InvalidRollValue { .. }
        )
    }
}
