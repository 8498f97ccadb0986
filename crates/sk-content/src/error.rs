//! Errors raised while choosing content.

use thiserror::Error;

/// Errors raised while choosing content.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    /// Excluding tags left fewer than two to choose from.
    #[error("excluding {excluded} tag(s) leaves {remaining}; a world needs at least 2")]
    TooFewTags {
        /// How many tags were excluded.
        excluded: usize,
        /// How many tags remain.
        remaining: usize,
    },

    /// A tag name matched nothing in the corpus.
    #[error("no tag named \"{0}\" (see `sk tag` for the list)")]
    UnknownTag(String),

    /// A gender name matched nothing.
    #[error("unknown gender \"{0}\", options are: male, female, other")]
    UnknownGender(String),
}

/// Convenience alias for content results.
pub type ContentResult<T> = Result<T, ContentError>;
