use serde::{Deserialize, Serialize};

use crate::errors::ScoreError;

/// Number of dice in every scored roll.
pub const DICE_PER_ROLL: usize = 5;

/// Represents one face of a standard six-sided die.
/// Numeric values match the pips shown on the face.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Die {
    /// One pip
    One = 1,
    /// Two pips
    Two,
    /// Three pips
    Three,
    /// Four pips
    Four,
    /// Five pips
    Five,
    /// Six pips
    Six,
}

impl Die {
    pub fn from_u8(v: u8) -> Option<Die> {
        match v {
            1 => Some(Die::One),
            2 => Some(Die::Two),
            3 => Some(Die::Three),
            4 => Some(Die::Four),
            5 => Some(Die::Five),
            6 => Some(Die::Six),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }
}

impl From<Die> for u8 {
    fn from(d: Die) -> u8 {
        d.value()
    }
}

impl TryFrom<u8> for Die {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Die::from_u8(v).ok_or_else(|| format!("die value {} is outside 1-6", v))
    }
}

pub fn all_faces() -> [Die; 6] {
    [Die::One, Die::Two, Die::Three, Die::Four, Die::Five, Die::Six]
}

/// A completed roll of exactly five dice, each showing 1 through 6.
///
/// Order is kept as supplied but no scoring rule depends on it. Construction
/// through [`Roll::new`] is the only place a roll is validated; everything
/// downstream can assume a well-formed roll.
///
/// # Examples
///
/// ```
/// use yahtzee_engine::dice::Roll;
///
/// let roll = Roll::new(&[2, 2, 2, 6, 6]).unwrap();
/// assert_eq!(roll.values(), [2, 2, 2, 6, 6]);
///
/// assert!(Roll::new(&[1, 2, 3]).is_err());
/// assert!(Roll::new(&[1, 2, 3, 4, 7]).is_err());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Roll {
    dice: [Die; DICE_PER_ROLL],
}

impl Roll {
    pub fn new(values: &[u8]) -> Result<Self, ScoreError> {
        if values.len() != DICE_PER_ROLL {
            return Err(ScoreError::InvalidRollLength {
                expected: DICE_PER_ROLL,
                actual: values.len(),
            });
        }
        let mut dice = [Die::One; DICE_PER_ROLL];
        for (position, (slot, &value)) in dice.iter_mut().zip(values).enumerate() {
            *slot = Die::from_u8(value).ok_or(ScoreError::InvalidRollValue { position, value })?;
        }
        Ok(Self { dice })
    }

    pub fn from_dice(dice: [Die; DICE_PER_ROLL]) -> Self {
        Self { dice }
    }

    pub fn dice(&self) -> &[Die; DICE_PER_ROLL] {
        &self.dice
    }

    /// Raw pip values in the order they were supplied.
    pub fn values(&self) -> [u8; DICE_PER_ROLL] {
        self.dice.map(Die::value)
    }
}

impl TryFrom<&[u8]> for Roll {
    type Error = ScoreError;

    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        Roll::new(values)
    }
}

impl TryFrom<[u8; DICE_PER_ROLL]> for Roll {
    type Error = ScoreError;

    fn try_from(values: [u8; DICE_PER_ROLL]) -> Result<Self, Self::Error> {
        Roll::new(&values)
    }
}

/// Every one of the 6^5 ordered rolls, in lexicographic order.
pub fn all_rolls() -> impl Iterator<Item = Roll> {
    let faces = all_faces();
    (0..6usize.pow(DICE_PER_ROLL as u32)).map(move |mut n| {
        let mut dice = [Die::One; DICE_PER_ROLL];
        for slot in dice.iter_mut().rev() {
            *slot = faces[n % 6];
            n /= 6;
        }
        Roll::from_dice(dice)
    })
}
