//! # yahtzee-engine: Dice Scoring Core
//!
//! Scores a completed five-die roll against the thirteen standard Yahtzee
//! categories. Every rule is immutable configuration plus a pure function, so
//! any number of rules may be evaluated against the same roll concurrently.
//!
//! ## Core Modules
//!
//! - [`dice`] - Die faces and the validated five-die [`dice::Roll`]
//! - [`stats`] - Sum, per-value count and frequency distribution of a roll
//! - [`rules`] - The scoring variants and the [`rules::ScoringRule`] trait
//! - [`catalogue`] - The thirteen named, pre-configured rules
//! - [`engine`] - Checked scoring entry points and full scorecards
//! - [`errors`] - Error types for malformed rolls and unknown rules
//!
//! ## Quick Start
//!
//! ```rust
//! use yahtzee_engine::engine::score;
//!
//! let s = score("fullHouse", &[3, 3, 3, 5, 5]).unwrap();
//! assert_eq!(s.points, 25);
//! println!("{}: {} ({})", s.category, s.points, s.description);
//! ```
//!
//! ## Scoring Every Category
//!
//! ```rust
//! use yahtzee_engine::catalogue::Category;
//! use yahtzee_engine::dice::Roll;
//! use yahtzee_engine::engine::score_all;
//!
//! let roll = Roll::new(&[1, 2, 3, 4, 6]).unwrap();
//! let card = score_all(&roll);
//! assert_eq!(card.get(Category::SmallStraight).points, 30);
//! assert_eq!(card.get(Category::LargeStraight).points, 0);
//! ```

pub mod catalogue;
pub mod dice;
pub mod engine;
pub mod errors;
pub mod rules;
pub mod stats;
