//! Random roll tables.
//!
//! Two shapes cover every table in the content corpus: [`RollList`], a
//! flat list picked uniformly, and [`RollTable`], a set of entries keyed on
//! the total of a dice expression. Tables are plain `'static` data so the
//! corpus can live in `static` items.

pub mod list;
pub mod weighted;

pub use list::RollList;
pub use weighted::{RollTable, TableAction, TableEntry};

use rand::rngs::StdRng;

/// Anything that can be rolled to produce a line of text.
pub trait Rollable {
    /// Human-readable name of the table.
    fn label(&self) -> &str;

    /// Roll once and return the selected text.
    fn roll(&self, rng: &mut StdRng) -> String;
}
