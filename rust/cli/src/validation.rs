//! Parsing of user-supplied dice.
//!
//! Only the textual shape is checked here. Length and the 1-6 range are
//! left to [`yahtzee_engine::dice::Roll::new`] so the CLI reports the same
//! InvalidRoll errors any other caller of the engine would see.

use crate::error::CliError;

/// Split a dice argument on commas and/or whitespace into raw values.
///
/// # Example
///
/// ```rust
/// # use yahtzee_cli::validation::parse_dice;
/// assert_eq!(parse_dice("2,2,2,6,6").unwrap(), vec![2, 2, 2, 6, 6]);
/// assert_eq!(parse_dice(" 1 2, 3 ,4 5").unwrap(), vec![1, 2, 3, 4, 5]);
/// assert!(parse_dice("1,two,3").is_err());
/// ```
pub fn parse_dice(input: &str) -> Result<Vec<u8>, CliError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            tok.parse::<u8>()
                .map_err(|_| CliError::InvalidInput(format!("'{}' is not a die value", tok)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_dice() {
        assert_eq!(parse_dice("").unwrap(), Vec::<u8>::new());
        assert_eq!(parse_dice(" , ,").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn out_of_range_values_pass_through() {
        // range is the engine's call
        assert_eq!(parse_dice("0,7,9").unwrap(), vec![0, 7, 9]);
    }

    #[test]
    fn negative_and_oversized_tokens_are_rejected() {
        assert!(parse_dice("-1,2,3,4,5").is_err());
        let err = parse_dice("1,2,3,4,300").unwrap_err();
        assert!(err.to_string().contains("'300' is not a die value"));
    }
}
