//! Error types for rule registration.
//!
//! Registration is fail-fast: a bad rule is rejected at the call site,
//! during the initialization phase. Transform functions never fail — a word
//! with no matching rule passes through unchanged.

use thiserror::Error;

/// Result type for rule registration operations.
pub type InflectionResult<T> = Result<T, InflectionError>;

/// Errors that can occur while registering inflection rules.
#[derive(Error, Debug)]
pub enum InflectionError {
    /// A rule pattern failed to compile as a regular expression.
    #[error("invalid rule pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// An irregular pair needs a leading character on both words.
    #[error("irregular pair requires non-empty words, got {singular:?} / {plural:?}")]
    InvalidIrregularPair {
        /// Singular side of the pair as given.
        singular: String,
        /// Plural side of the pair as given.
        plural: String,
    },

    /// A clear request named a scope outside the known set.
    #[error("unknown rule scope {0:?} (expected all, plurals, singulars, uncountables or humans)")]
    UnknownRuleScope(String),
}
