use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dice::Die;
use crate::errors::ScoreError;
use crate::rules::{
    FullHouse, LargeStraight, Rule, SingleValueTotal, SmallStraight, ThresholdCountSum, Yahtzee,
};

/// The thirteen scoring boxes, in scoresheet order.
/// Discriminants index into [`CATALOGUE`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Ones = 0,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfKind,
    FourOfKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
    Chance,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ones => "ones",
            Category::Twos => "twos",
            Category::Threes => "threes",
            Category::Fours => "fours",
            Category::Fives => "fives",
            Category::Sixes => "sixes",
            Category::ThreeOfKind => "three-of-kind",
            Category::FourOfKind => "four-of-kind",
            Category::FullHouse => "full-house",
            Category::SmallStraight => "small-straight",
            Category::LargeStraight => "large-straight",
            Category::Yahtzee => "yahtzee",
            Category::Chance => "chance",
        }
    }

    /// The catalogue entry bound to this category.
    pub fn entry(self) -> &'static RuleEntry {
        &CATALOGUE[self as usize]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ScoreError;

    /// Accepts the kebab-case names as well as `threeOfKind`-style camelCase
    /// and `three_of_kind`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        all_categories()
            .into_iter()
            .find(|c| c.as_str().replace('-', "") == folded)
            .ok_or_else(|| ScoreError::UnknownRule(s.to_string()))
    }
}

pub fn all_categories() -> [Category; 13] {
    [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::ThreeOfKind,
        Category::FourOfKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yahtzee,
        Category::Chance,
    ]
}

/// One named, pre-configured rule.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct RuleEntry {
    /// Which scoring box this entry fills
    pub category: Category,
    /// Variant plus its fixed configuration
    pub rule: Rule,
    /// Human-readable summary shown next to the score
    pub description: &'static str,
}

const fn single(category: Category, target_value: Die, description: &'static str) -> RuleEntry {
    RuleEntry {
        category,
        rule: Rule::SingleValueTotal(SingleValueTotal { target_value }),
        description,
    }
}

const fn threshold(category: Category, required_count: u32, description: &'static str) -> RuleEntry {
    RuleEntry {
        category,
        rule: Rule::ThresholdCountSum(ThresholdCountSum { required_count }),
        description,
    }
}

/// The thirteen standard rules, indexed by [`Category`].
pub static CATALOGUE: [RuleEntry; 13] = [
    single(Category::Ones, Die::One, "1 point for each one"),
    single(Category::Twos, Die::Two, "2 points for each two"),
    single(Category::Threes, Die::Three, "3 points for each three"),
    single(Category::Fours, Die::Four, "4 points for each four"),
    single(Category::Fives, Die::Five, "5 points for each five"),
    single(Category::Sixes, Die::Six, "6 points for each six"),
    threshold(Category::ThreeOfKind, 3, "Sum of all dice if 3 are same"),
    threshold(Category::FourOfKind, 4, "Sum of all dice if 4 are same"),
    RuleEntry {
        category: Category::FullHouse,
        rule: Rule::FullHouse(FullHouse { flat_score: 25 }),
        description: "25 points if full house",
    },
    RuleEntry {
        category: Category::SmallStraight,
        rule: Rule::SmallStraight(SmallStraight { flat_score: 30 }),
        description: "4 consecutive dice score 30",
    },
    RuleEntry {
        category: Category::LargeStraight,
        rule: Rule::LargeStraight(LargeStraight { flat_score: 40 }),
        description: "5 consecutive dice score 40",
    },
    RuleEntry {
        category: Category::Yahtzee,
        rule: Rule::Yahtzee(Yahtzee { flat_score: 50 }),
        description: "All dice the same score 50",
    },
    // at least 0 of a kind always holds, so this sums every roll
    threshold(Category::Chance, 0, "Sum of all dice"),
];

/// Finds a catalogue entry by name.
///
/// # Errors
///
/// Returns [`ScoreError::UnknownRule`] when `name` matches no category.
///
/// # Examples
///
/// ```
/// use yahtzee_engine::catalogue::{lookup, Category};
///
/// assert_eq!(lookup("fullHouse").unwrap().category, Category::FullHouse);
/// assert_eq!(lookup("full-house").unwrap().category, Category::FullHouse);
/// assert!(lookup("two-pair").is_err());
/// ```
pub fn lookup(name: &str) -> Result<&'static RuleEntry, ScoreError> {
    name.parse::<Category>().map(Category::entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_is_indexed_by_category() {
        for (i, entry) in CATALOGUE.iter().enumerate() {
            assert_eq!(entry.category as usize, i);
            assert_eq!(all_categories()[i], entry.category);
        }
    }

    #[test]
    fn parses_every_spelling() {
        for name in ["threeOfKind", "three-of-kind", "three_of_kind", "THREEOFKIND"] {
            assert_eq!(name.parse::<Category>(), Ok(Category::ThreeOfKind));
        }
        assert_eq!(
            "pair".parse::<Category>(),
            Err(ScoreError::UnknownRule("pair".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for c in all_categories() {
            assert_eq!(c.to_string().parse::<Category>(), Ok(c));
        }
    }
}
