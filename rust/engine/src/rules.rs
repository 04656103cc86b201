use serde::{Deserialize, Serialize};

use crate::dice::{Die, Roll, DICE_PER_ROLL};
use crate::stats::{count_value, face_mask, frequency_counts, sum};

/// Anything that turns a completed roll into a score.
///
/// Implementations are pure: the same roll always yields the same score,
/// nothing is mutated, and every well-formed roll produces a value.
pub trait ScoringRule {
    fn evaluate(&self, roll: &Roll) -> u32;
}

/// `target_value` points for each die showing `target_value` (ones through sixes).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SingleValueTotal {
    pub target_value: Die,
}

impl ScoringRule for SingleValueTotal {
    fn evaluate(&self, roll: &Roll) -> u32 {
        let v = self.target_value.value();
        u32::from(v) * count_value(&roll.values(), v)
    }
}

/// Sum of all dice when some value appears at least `required_count` times.
///
/// A `required_count` of 0 is always met, which makes this rule chance.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ThresholdCountSum {
    pub required_count: u32,
}

impl ScoringRule for ThresholdCountSum {
    fn evaluate(&self, roll: &Roll) -> u32 {
        let values = roll.values();
        if frequency_counts(&values)
            .iter()
            .any(|&c| c >= self.required_count)
        {
            sum(&values)
        } else {
            0
        }
    }
}

/// Flat score for a three-of-a-kind plus a pair.
///
/// Five of a kind has no count of exactly 2 and does not qualify.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct FullHouse {
    pub flat_score: u32,
}

impl ScoringRule for FullHouse {
    fn evaluate(&self, roll: &Roll) -> u32 {
        let counts = frequency_counts(&roll.values());
        if counts.contains(&2) && counts.contains(&3) {
            self.flat_score
        } else {
            0
        }
    }
}

/// Flat score when four consecutive faces appear anywhere in the roll.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SmallStraight {
    pub flat_score: u32,
}

impl ScoringRule for SmallStraight {
    fn evaluate(&self, roll: &Roll) -> u32 {
        let faces = face_mask(&roll.values());
        let has = |v: u8| faces & (1 << v) != 0;
        // 2-3-4 extended by 1 or 5, or 3-4-5 extended by 2 or 6
        let low = has(2) && has(3) && has(4) && (has(1) || has(5));
        let high = has(3) && has(4) && has(5) && (has(2) || has(6));
        if low || high {
            self.flat_score
        } else {
            0
        }
    }
}

/// Flat score for five distinct faces that are not both 1 and 6.
///
/// Five distinct faces out of six are consecutive exactly when the missing
/// face is 1 or 6.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct LargeStraight {
    pub flat_score: u32,
}

impl ScoringRule for LargeStraight {
    fn evaluate(&self, roll: &Roll) -> u32 {
        let faces = face_mask(&roll.values());
        let spans_both_ends = faces & (1 << 1) != 0 && faces & (1 << 6) != 0;
        if faces.count_ones() as usize == DICE_PER_ROLL && !spans_both_ends {
            self.flat_score
        } else {
            0
        }
    }
}

/// Flat score when all five dice show the same face.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Yahtzee {
    pub flat_score: u32,
}

impl ScoringRule for Yahtzee {
    fn evaluate(&self, roll: &Roll) -> u32 {
        // exactly one distinct value, not merely some count of 5
        match frequency_counts(&roll.values()).as_slice() {
            [5] => self.flat_score,
            _ => 0,
        }
    }
}

/// The closed set of scoring behaviours, each carrying its own configuration.
///
/// # Examples
///
/// ```
/// use yahtzee_engine::dice::Roll;
/// use yahtzee_engine::rules::{FullHouse, Rule, ScoringRule, ThresholdCountSum};
///
/// let roll = Roll::new(&[2, 2, 2, 6, 6]).unwrap();
///
/// let three_of_kind = Rule::ThresholdCountSum(ThresholdCountSum { required_count: 3 });
/// assert_eq!(three_of_kind.evaluate(&roll), 18);
///
/// let full_house = Rule::FullHouse(FullHouse { flat_score: 25 });
/// assert_eq!(full_house.evaluate(&roll), 25);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum Rule {
    SingleValueTotal(SingleValueTotal),
    ThresholdCountSum(ThresholdCountSum),
    FullHouse(FullHouse),
    SmallStraight(SmallStraight),
    LargeStraight(LargeStraight),
    Yahtzee(Yahtzee),
}

impl Rule {
    pub fn variant_name(&self) -> &'static str {
        match self {
            Rule::SingleValueTotal(_) => "single-value total",
            Rule::ThresholdCountSum(_) => "threshold-count sum",
            Rule::FullHouse(_) => "full house",
            Rule::SmallStraight(_) => "small straight",
            Rule::LargeStraight(_) => "large straight",
            Rule::Yahtzee(_) => "yahtzee",
        }
    }

    /// Highest score any roll can earn under this rule.
    pub fn max_score(&self) -> u32 {
        match self {
            Rule::SingleValueTotal(r) => u32::from(r.target_value.value()) * DICE_PER_ROLL as u32,
            Rule::ThresholdCountSum(r) => {
                if r.required_count as usize > DICE_PER_ROLL {
                    0
                } else {
                    6 * DICE_PER_ROLL as u32
                }
            }
            Rule::FullHouse(r) => r.flat_score,
            Rule::SmallStraight(r) => r.flat_score,
            Rule::LargeStraight(r) => r.flat_score,
            Rule::Yahtzee(r) => r.flat_score,
        }
    }
}

impl ScoringRule for Rule {
    fn evaluate(&self, roll: &Roll) -> u32 {
        match self {
            Rule::SingleValueTotal(r) => r.evaluate(roll),
            Rule::ThresholdCountSum(r) => r.evaluate(roll),
            Rule::FullHouse(r) => r.evaluate(roll),
            Rule::SmallStraight(r) => r.evaluate(roll),
            Rule::LargeStraight(r) => r.evaluate(roll),
            Rule::Yahtzee(r) => r.evaluate(roll),
        }
    }
}
