/// Alias for `Result<T, SkError>`.
pub type SkResult<T> = Result<T, SkError>;

/// Errors that can occur when configuring, validating, or loading a sector.
#[derive(Debug, thiserror::Error)]
pub enum SkError {
    /// Grid height or width outside the supported range.
    #[error("sector {axis} must be between {min} and {max}, got {value}")]
    InvalidDimension {
        /// Which dimension ("rows" or "cols").
        axis: &'static str,
        /// The rejected value.
        value: u32,
        /// Smallest allowed value.
        min: u32,
        /// Largest allowed value.
        max: u32,
    },

    /// A percentage chance above 100.
    #[error("{name} must be a percentage between 0 and 100, got {value}")]
    InvalidChance {
        /// Which chance was rejected.
        name: &'static str,
        /// The rejected value.
        value: u32,
    },

    /// A positive secondary-world chance with no room for secondary worlds.
    #[error("other worlds chance is {chance}% but at most 0 other worlds are allowed")]
    NoRoomForOtherWorlds {
        /// The configured chance.
        chance: u32,
    },

    /// A density fill range that cannot be satisfied.
    #[error("invalid density range: {0}")]
    InvalidDensity(String),

    /// A density label that is not sparse, average, or dense.
    #[error("unknown density \"{0}\", expected one of: sparse, average, dense")]
    UnknownDensity(String),

    /// A culture name that matches no known culture.
    #[error("unknown culture \"{name}\", options are: {options}")]
    UnknownCulture {
        /// The name that was looked up.
        name: String,
        /// Comma-separated list of valid cultures.
        options: String,
    },

    /// An output format that is neither txt nor md.
    #[error("unsupported output format \"{0}\", available formats are: txt, md")]
    UnknownFormat(String),

    /// A loaded sector breaks one of the sector invariants.
    #[error("invalid sector: {0}")]
    InvalidSector(String),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
