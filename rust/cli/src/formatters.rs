//! Plain-text rendering of scores, scorecards and the rule catalogue.
//!
//! Every function here is pure and returns a `String`; commands decide
//! where it is written.

use yahtzee_engine::catalogue::RuleEntry;
use yahtzee_engine::dice::Roll;
use yahtzee_engine::engine::{Score, Scorecard};
use yahtzee_engine::rules::Rule;

const NAME_WIDTH: usize = 16;

/// Format a roll as space-separated pips in brackets, e.g. `[2 2 2 6 6]`.
///
/// ```rust
/// use yahtzee_engine::dice::Roll;
/// use yahtzee_cli::formatters::format_roll;
///
/// let roll = Roll::new(&[3, 1, 4, 1, 5]).unwrap();
/// assert_eq!(format_roll(&roll), "[3 1 4 1 5]");
/// ```
pub fn format_roll(roll: &Roll) -> String {
    let pips: Vec<String> = roll.values().iter().map(|v| v.to_string()).collect();
    format!("[{}]", pips.join(" "))
}

/// One aligned line: name, points, description.
pub fn format_score(score: &Score) -> String {
    format!(
        "{:<width$}{:>5}  {}",
        score.category.as_str(),
        score.points,
        score.description,
        width = NAME_WIDTH
    )
}

/// Full scorecard table. With `show_zero` false, categories scoring 0 are left out.
pub fn format_scorecard(card: &Scorecard, show_zero: bool) -> String {
    let mut lines = vec![
        format!("Roll: {}", format_roll(&card.roll)),
        format!("{:<width$}{:>5}  Description", "Category", "Score", width = NAME_WIDTH),
    ];
    lines.extend(
        card.iter()
            .filter(|s| show_zero || s.points > 0)
            .map(format_score),
    );
    let best = card.best();
    lines.push(format!("Best: {} ({})", best.category, best.points));
    lines.join("\n")
}

/// The configuration parameter of a rule, e.g. `target=3` or `score=25`.
pub fn format_rule_parameter(rule: &Rule) -> String {
    match rule {
        Rule::SingleValueTotal(r) => format!("target={}", r.target_value.value()),
        Rule::ThresholdCountSum(r) => format!("count>={}", r.required_count),
        Rule::FullHouse(r) => format!("score={}", r.flat_score),
        Rule::SmallStraight(r) => format!("score={}", r.flat_score),
        Rule::LargeStraight(r) => format!("score={}", r.flat_score),
        Rule::Yahtzee(r) => format!("score={}", r.flat_score),
    }
}

pub fn format_rule_entry(entry: &RuleEntry) -> String {
    format!(
        "{:<width$}{:<21}{:<11}{}",
        entry.category.as_str(),
        entry.rule.variant_name(),
        format_rule_parameter(&entry.rule),
        entry.description,
        width = NAME_WIDTH
    )
}
