//! Tables keyed on a dice total.

use log::trace;
use rand::Rng;
use rand::rngs::StdRng;

use super::{RollList, Rollable};
use crate::dice::DiceExpr;
use crate::error::{MechError, MechResult};

/// Reroll entries landing on other reroll entries stop expanding past this depth.
const MAX_REROLL_DEPTH: u32 = 4;

/// Extra work triggered when an entry is selected.
#[derive(Debug, Clone, Copy)]
pub enum TableAction {
    /// Replace the entry with this many further rolls on the same table.
    Reroll(u32),
    /// Append one roll on a nested list to the entry text.
    Chain(&'static RollList),
    /// Append between `min` and `max` distinct items of a nested list.
    Mix {
        /// The list to draw from.
        list: &'static RollList,
        /// Fewest items drawn.
        min: usize,
        /// Most items drawn.
        max: usize,
    },
}

/// One row of a [`RollTable`], matching totals in `min..=max`.
#[derive(Debug, Clone, Copy)]
pub struct TableEntry {
    /// Lowest matching total.
    pub min: i32,
    /// Highest matching total.
    pub max: i32,
    /// Result text.
    pub text: &'static str,
    /// Optional follow-up action.
    pub action: Option<TableAction>,
}

impl TableEntry {
    /// An entry covering `min..=max`.
    pub const fn range(min: i32, max: i32, text: &'static str) -> Self {
        Self {
            min,
            max,
            text,
            action: None,
        }
    }

    /// An entry matching a single total.
    pub const fn single(value: i32, text: &'static str) -> Self {
        Self::range(value, value, text)
    }

    /// Attach a follow-up action.
    pub const fn with_action(mut self, action: TableAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Whether `total` falls inside this entry.
    pub const fn contains(&self, total: i32) -> bool {
        self.min <= total && total <= self.max
    }

    fn distance(&self, total: i32) -> i32 {
        if total < self.min {
            self.min - total
        } else {
            total.saturating_sub(self.max).max(0)
        }
    }
}

/// A weighted table: roll `dice`, select the entry containing the total.
#[derive(Debug, Clone, Copy)]
pub struct RollTable {
    /// Name of the table.
    pub name: &'static str,
    /// The dice rolled to pick an entry.
    pub dice: DiceExpr,
    /// Table rows.
    pub entries: &'static [TableEntry],
}

impl RollTable {
    /// Build a table.
    pub const fn new(name: &'static str, dice: DiceExpr, entries: &'static [TableEntry]) -> Self {
        Self {
            name,
            dice,
            entries,
        }
    }

    /// The entry for `total`. Totals outside every range go to the nearest entry.
    pub fn entry_for(&self, total: i32) -> Option<&TableEntry> {
        self.entries
            .iter()
            .find(|e| e.contains(total))
            .or_else(|| self.entries.iter().min_by_key(|e| e.distance(total)))
    }

    /// Check that every total the dice can produce matches exactly one entry.
    pub fn validate(&self) -> MechResult<()> {
        if self.entries.is_empty() {
            return Err(MechError::EmptyTable(self.name.to_string()));
        }

        if let Some(e) = self.entries.iter().find(|e| e.min > e.max) {
            return Err(MechError::InvertedRange {
                table: self.name.to_string(),
                min: e.min,
                max: e.max,
            });
        }

        for total in self.dice.min()..=self.dice.max() {
            match self.entries.iter().filter(|e| e.contains(total)).count() {
                0 => {
                    return Err(MechError::Gap {
                        table: self.name.to_string(),
                        value: total,
                    });
                }
                1 => {}
                _ => {
                    return Err(MechError::Overlap {
                        table: self.name.to_string(),
                        value: total,
                    });
                }
            }
        }

        Ok(())
    }

    fn roll_at_depth(&self, rng: &mut StdRng, depth: u32) -> String {
        let total = self.dice.roll(rng).total();
        let Some(entry) = self.entry_for(total) else {
            return String::new();
        };
        trace!("{}: rolled {total} -> {}", self.name, entry.text);

        match entry.action {
            None => entry.text.to_string(),
            Some(TableAction::Reroll(_)) if depth >= MAX_REROLL_DEPTH => entry.text.to_string(),
            Some(TableAction::Reroll(times)) => (0..times)
                .map(|_| self.roll_at_depth(rng, depth + 1))
                .collect::<Vec<_>>()
                .join("; "),
            Some(TableAction::Chain(list)) => {
                format!("{}: {}", entry.text, list.roll(rng))
            }
            Some(TableAction::Mix { list, min, max }) => {
                let amount = rng.random_range(min..=max.max(min));
                format!("{}: {}", entry.text, list.sample(rng, amount).join(", "))
            }
        }
    }
}

impl Rollable for RollTable {
    fn label(&self) -> &str {
        self.name
    }

    fn roll(&self, rng: &mut StdRng) -> String {
        self.roll_at_depth(rng, 0)
    }
}
