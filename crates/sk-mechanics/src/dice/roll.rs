//! Dice roll results and aggregation.

use serde::{Deserialize, Serialize};

use super::Die;

/// The result of rolling a single die.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DieResult {
    /// The type of die that was rolled.
    pub die: Die,
    /// The value rolled (1 to die.sides()).
    pub value: u32,
}

/// The result of rolling a whole dice expression.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual die results.
    pub dice: Vec<DieResult>,
    /// Flat modifier applied to the sum.
    pub modifier: i32,
}

impl RollResult {
    /// Sum of all die values plus the modifier, saturating at the `i32` range.
    pub fn total(&self) -> i32 {
        let sum: i64 = self.dice.iter().map(|d| i64::from(d.value)).sum();
        super::saturate(sum + i64::from(self.modifier))
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.value.to_string()).collect();
        write!(f, "[{}]", values.join(", "))?;
        match self.modifier {
            0 => {}
            m if m > 0 => write!(f, " +{m}")?,
            m => write!(f, " {m}")?,
        }
        write!(f, " = {}", self.total())
    }
}
