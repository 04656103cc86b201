use serde::Serialize;
use tracing::{debug, warn};

use crate::catalogue::{all_categories, lookup, Category};
use crate::dice::Roll;
use crate::errors::ScoreError;
use crate::rules::ScoringRule;

/// Result of scoring one roll under one catalogue rule.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Score {
    /// The rule that was applied
    pub category: Category,
    /// Points awarded, 0 when the roll does not qualify
    pub points: u32,
    /// Static description of the rule, for display next to the points
    pub description: &'static str,
}

/// Candidate scores for one roll under every catalogue rule.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Scorecard {
    pub roll: Roll,
    /// One score per category, in catalogue order
    pub scores: Vec<Score>,
}

impl Scorecard {
    pub fn get(&self, category: Category) -> &Score {
        &self.scores[category as usize]
    }

    /// Highest-scoring category; ties go to the earliest in catalogue order.
    pub fn best(&self) -> &Score {
        let mut best = &self.scores[0];
        for s in &self.scores[1..] {
            if s.points > best.points {
                best = s;
            }
        }
        best
    }

    pub fn iter(&self) -> impl Iterator<Item = &Score> {
        self.scores.iter()
    }
}

/// Scores an already-validated roll under one category. Never fails.
pub fn score_roll(category: Category, roll: &Roll) -> Score {
    let entry = category.entry();
    let points = entry.rule.evaluate(roll);
    debug!(category = %category, dice = ?roll.values(), points, "scored roll");
    Score {
        category,
        points,
        description: entry.description,
    }
}

/// Looks up `rule_name` in the catalogue and scores `values` under it.
///
/// This is the checked entry point for callers holding raw die values: the
/// roll is validated before any rule runs.
///
/// # Errors
///
/// - [`ScoreError::InvalidRollLength`] / [`ScoreError::InvalidRollValue`] when
///   `values` is not five dice in 1-6
/// - [`ScoreError::UnknownRule`] when `rule_name` names no catalogue entry
///
/// # Examples
///
/// ```
/// use yahtzee_engine::engine::score;
///
/// let s = score("threeOfKind", &[2, 2, 2, 6, 6]).unwrap();
/// assert_eq!(s.points, 18);
/// assert_eq!(s.description, "Sum of all dice if 3 are same");
///
/// assert_eq!(score("four-of-kind", &[2, 2, 2, 6, 6]).unwrap().points, 0);
/// assert!(score("chance", &[2, 2, 2, 6]).unwrap_err().is_invalid_roll());
/// ```
pub fn score(rule_name: &str, values: &[u8]) -> Result<Score, ScoreError> {
    let roll = checked_roll(values)?;
    let entry = lookup(rule_name)?;
    Ok(score_roll(entry.category, &roll))
}

/// Scores a roll under all thirteen rules.
///
/// ```
/// use yahtzee_engine::catalogue::Category;
/// use yahtzee_engine::dice::Roll;
/// use yahtzee_engine::engine::score_all;
///
/// let card = score_all(&Roll::new(&[5, 5, 5, 5, 5]).unwrap());
/// assert_eq!(card.get(Category::Yahtzee).points, 50);
/// assert_eq!(card.get(Category::FullHouse).points, 0);
/// assert_eq!(card.best().category, Category::Yahtzee);
/// ```
pub fn score_all(roll: &Roll) -> Scorecard {
    let scores = all_categories()
        .into_iter()
        .map(|c| score_roll(c, roll))
        .collect();
    Scorecard {
        roll: *roll,
        scores,
    }
}

/// Validates raw values and scores them under every rule.
pub fn score_all_values(values: &[u8]) -> Result<Scorecard, ScoreError> {
    checked_roll(values).map(|roll| score_all(&roll))
}

fn checked_roll(values: &[u8]) -> Result<Roll, ScoreError> {
    Roll::new(values).inspect_err(|e| warn!(dice = ?values, error = %e, "rejected roll"))
}
