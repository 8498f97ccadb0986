//! Error types for the dice and table engine.

/// Errors that can occur while parsing dice or checking tables.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MechError {
    /// A dice expression could not be parsed.
    #[error("invalid dice expression \"{0}\"")]
    InvalidDice(String),

    /// A dice expression asks for more dice than the engine will roll.
    #[error("too many dice in \"{expr}\" (at most {max})")]
    TooManyDice {
        /// The offending expression.
        expr: String,
        /// The maximum number of dice allowed.
        max: u32,
    },

    /// A dice expression uses a die with more sides than the engine will roll.
    #[error("die too large in \"{expr}\" (at most {max} sides)")]
    TooManySides {
        /// The offending expression.
        expr: String,
        /// The maximum number of sides allowed.
        max: u32,
    },

    /// A table has no entries.
    #[error("table '{0}' has no entries")]
    EmptyTable(String),

    /// A table entry has its bounds reversed.
    #[error("table '{table}' has an entry with min {min} > max {max}")]
    InvertedRange {
        /// The table name.
        table: String,
        /// Lower bound of the entry.
        min: i32,
        /// Upper bound of the entry.
        max: i32,
    },

    /// Two entries of a table claim the same total.
    #[error("table '{table}' matches {value} more than once")]
    Overlap {
        /// The table name.
        table: String,
        /// The total matched twice.
        value: i32,
    },

    /// A total the dice can produce is not matched by any entry.
    #[error("table '{table}' has no entry for {value}")]
    Gap {
        /// The table name.
        table: String,
        /// The unmatched total.
        value: i32,
    },
}

/// Convenience result type for dice and table operations.
pub type MechResult<T> = Result<T, MechError>;
