//! Rewrite-rule data structures.
//!
//! The leaf pieces of the engine: pattern/replacement rules and their
//! ordered lists, the uncountable-word set and the acronym table. None of
//! these know about locales; [`crate::locale::Inflections`] composes them.

pub mod acronym;
pub mod irregular;
pub mod rule;
pub mod uncountable;

pub use acronym::Acronyms;
pub use rule::{Pattern, Rule, RuleList};
pub use uncountable::Uncountables;
