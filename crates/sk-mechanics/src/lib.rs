//! Dice and roll-table engine for sektor.
//!
//! Provides dice expressions (`2d6`, `10d5+1`), their results, flat roll
//! lists, and weighted tables keyed on a dice total. Tables can trigger
//! further rolls: a reroll of the same table or a chained roll on a nested
//! list. Every roll takes an explicit [`rand::rngs::StdRng`] so callers
//! control reproducibility.

pub mod dice;
pub mod error;
pub mod table;

pub use dice::{DiceExpr, Die, DieResult, RollResult};
pub use error::{MechError, MechResult};
pub use table::{RollList, RollTable, Rollable, TableAction, TableEntry};
