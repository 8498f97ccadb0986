//! Dice types and dice expressions.
//!
//! Supports standard polyhedral dice (d4 through d100) plus custom dice,
//! combined into expressions such as `2d6`, `d20` or `10d5+3`.

pub mod roll;

pub use roll::{DieResult, RollResult};

use std::str::FromStr;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// The most dice a single expression may roll.
pub const MAX_DICE: u32 = 1000;

/// The most sides a parsed die may have.
pub const MAX_SIDES: u32 = 1_000_000;

/// Clamp a wide total into `i32`.
pub(crate) const fn saturate(total: i64) -> i32 {
    if total > i32::MAX as i64 {
        i32::MAX
    } else if total < i32::MIN as i64 {
        i32::MIN
    } else {
        total as i32
    }
}

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub const fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// Parse a die from a string like "d20", "d6", "d100".
    pub fn from_str_tag(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "d4" => Some(Self::D4),
            "d6" => Some(Self::D6),
            "d8" => Some(Self::D8),
            "d10" => Some(Self::D10),
            "d12" => Some(Self::D12),
            "d20" => Some(Self::D20),
            "d100" => Some(Self::D100),
            other => {
                let num = other.strip_prefix('d')?.parse::<u32>().ok()?;
                if num >= 2 {
                    Some(Self::Custom(num))
                } else {
                    None
                }
            }
        }
    }

    /// Roll this die once.
    pub fn roll(self, rng: &mut StdRng) -> u32 {
        rng.random_range(1..=self.sides())
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::D4 => write!(f, "d4"),
            Self::D6 => write!(f, "d6"),
            Self::D8 => write!(f, "d8"),
            Self::D10 => write!(f, "d10"),
            Self::D12 => write!(f, "d12"),
            Self::D20 => write!(f, "d20"),
            Self::D100 => write!(f, "d100"),
            Self::Custom(n) => write!(f, "d{n}"),
        }
    }
}

/// A dice expression: `count` dice of one type plus a flat modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceExpr {
    /// Number of dice rolled.
    pub count: u32,
    /// The die type.
    pub die: Die,
    /// Flat value added to the dice sum.
    pub modifier: i32,
}

impl DiceExpr {
    /// Build an expression without a modifier.
    pub const fn new(count: u32, die: Die) -> Self {
        Self {
            count,
            die,
            modifier: 0,
        }
    }

    /// Set the flat modifier.
    pub const fn with_modifier(mut self, modifier: i32) -> Self {
        self.modifier = modifier;
        self
    }

    /// Smallest total this expression can produce.
    pub const fn min(&self) -> i32 {
        saturate(self.count as i64 + self.modifier as i64)
    }

    /// Largest total this expression can produce.
    pub const fn max(&self) -> i32 {
        saturate(self.count as i64 * self.die.sides() as i64 + self.modifier as i64)
    }

    /// Roll every die in the expression.
    pub fn roll(&self, rng: &mut StdRng) -> RollResult {
        let dice = (0..self.count)
            .map(|_| DieResult {
                die: self.die,
                value: self.die.roll(rng),
            })
            .collect();
        RollResult {
            dice,
            modifier: self.modifier,
        }
    }
}

impl FromStr for DiceExpr {
    type Err = MechError;

    fn from_str(s: &str) -> MechResult<Self> {
        let expr = s.trim().to_lowercase();
        let invalid = || MechError::InvalidDice(s.trim().to_string());

        let (dice_part, modifier) = match expr.find(['+', '-']) {
            Some(idx) => {
                let modifier = expr[idx..].parse::<i32>().map_err(|_| invalid())?;
                (&expr[..idx], modifier)
            }
            None => (expr.as_str(), 0),
        };

        let (count, sides) = dice_part.split_once('d').ok_or_else(invalid)?;
        let count = if count.is_empty() {
            1
        } else {
            count.parse::<u32>().map_err(|_| invalid())?
        };
        if count == 0 {
            return Err(invalid());
        }
        if count > MAX_DICE {
            return Err(MechError::TooManyDice {
                expr: s.trim().to_string(),
                max: MAX_DICE,
            });
        }
        let die = Die::from_str_tag(&format!("d{sides}")).ok_or_else(invalid)?;
        if die.sides() > MAX_SIDES {
            return Err(MechError::TooManySides {
                expr: s.trim().to_string(),
                max: MAX_SIDES,
            });
        }

        Ok(Self {
            count,
            die,
            modifier,
        })
    }
}

impl std::fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.count, self.die)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}
