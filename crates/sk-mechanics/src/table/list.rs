//! Flat lists with a uniform pick.

use rand::Rng;
use rand::rngs::StdRng;

use super::Rollable;

/// A list of text items, each equally likely.
#[derive(Debug, Clone, Copy)]
pub struct RollList {
    /// Name of the list.
    pub name: &'static str,
    /// The items to choose from.
    pub items: &'static [&'static str],
}

impl RollList {
    /// Build a list.
    pub const fn new(name: &'static str, items: &'static [&'static str]) -> Self {
        Self { name, items }
    }

    /// Pick one item, or `None` if the list is empty.
    pub fn pick(&self, rng: &mut StdRng) -> Option<&'static str> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.items[rng.random_range(0..self.items.len())])
    }

    /// Pick `amount` distinct items, or every item if the list is shorter.
    pub fn sample(&self, rng: &mut StdRng, amount: usize) -> Vec<&'static str> {
        let amount = amount.min(self.items.len());
        rand::seq::index::sample(rng, self.items.len(), amount)
            .into_iter()
            .map(|i| self.items[i])
            .collect()
    }

    /// Number of items in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Rollable for RollList {
    fn label(&self) -> &str {
        self.name
    }

    fn roll(&self, rng: &mut StdRng) -> String {
        self.pick(rng).unwrap_or_default().to_string()
    }
}

impl std::fmt::Display for RollList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.items.join(", "))
    }
}
