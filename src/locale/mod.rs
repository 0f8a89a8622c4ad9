//! Per-locale rule ownership and the locale registry.
//!
//! One [`Inflections`] instance owns every rule structure for a single
//! locale. [`Inflector`] hands instances out by locale identifier and is
//! the only shared mutable state in the engine: registration mutates a
//! locale's rule set in place and affects every later transform call for
//! that locale.

mod english;
mod registry;

pub use registry::{Inflector, DEFAULT_LOCALE};

use std::str::FromStr;

use crate::error::{InflectionError, InflectionResult};
use crate::rules::irregular;
use crate::rules::{Acronyms, Pattern, Rule, RuleList, Uncountables};

/// Which rule structures a [`Inflections::clear`] call resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    /// Plural, singular and human rule lists plus the uncountable set.
    All,
    Plurals,
    Singulars,
    Uncountables,
    Humans,
}

impl FromStr for RuleScope {
    type Err = InflectionError;

    fn from_str(scope: &str) -> Result<Self, Self::Err> {
        match scope {
            "all" => Ok(RuleScope::All),
            "plurals" => Ok(RuleScope::Plurals),
            "singulars" => Ok(RuleScope::Singulars),
            "uncountables" => Ok(RuleScope::Uncountables),
            "humans" => Ok(RuleScope::Humans),
            other => Err(InflectionError::UnknownRuleScope(other.to_string())),
        }
    }
}

/// The rule tables for one locale.
///
/// Transforms only read from an instance; the registration methods below
/// are the only mutations. Rule lookup is first-change-wins over lists that
/// prepend on insert, so the most recently registered rule takes precedence.
#[derive(Debug, Clone)]
pub struct Inflections {
    pub(crate) plurals: RuleList,
    pub(crate) singulars: RuleList,
    pub(crate) humans: RuleList,
    pub(crate) uncountables: Uncountables,
    pub(crate) acronyms: Acronyms,
}

impl Default for Inflections {
    fn default() -> Self {
        Self::new()
    }
}

impl Inflections {
    /// Rule set with nothing registered.
    pub fn new() -> Self {
        Self {
            plurals: RuleList::default(),
            singulars: RuleList::default(),
            humans: RuleList::default(),
            uncountables: Uncountables::default(),
            acronyms: Acronyms::default(),
        }
    }

    /// Rule set seeded with the built-in English table.
    pub fn english() -> Self {
        english::seeded()
    }

    /// Register a pluralization rule. The word the rule produces (and, for
    /// literal patterns, the word it matches) stops being uncountable.
    pub fn plural(&mut self, pattern: Pattern, replacement: &str) {
        if let Some(word) = pattern.as_exact() {
            self.uncountables.remove(word);
        }
        self.uncountables.remove(replacement);
        self.plurals.prepend(Rule::new(pattern, replacement));
    }

    /// Register a singularization rule. Same uncountable scrubbing as
    /// [`Inflections::plural`].
    pub fn singular(&mut self, pattern: Pattern, replacement: &str) {
        if let Some(word) = pattern.as_exact() {
            self.uncountables.remove(word);
        }
        self.uncountables.remove(replacement);
        self.singulars.prepend(Rule::new(pattern, replacement));
    }

    /// Register an irregular singular/plural pair.
    ///
    /// Expands into a case-aware rule batch on both lists (see
    /// [`crate::rules::irregular::expand`]) so the pair resolves regardless
    /// of the input's leading-letter case.
    pub fn irregular(&mut self, singular: &str, plural: &str) -> InflectionResult<()> {
        self.uncountables.remove(singular);
        self.uncountables.remove(plural);
        let batch = irregular::expand(singular, plural)?;
        for rule in batch.plurals {
            self.plurals.prepend(rule);
        }
        for rule in batch.singulars {
            self.singulars.prepend(rule);
        }
        Ok(())
    }

    /// Register words for which pluralize/singularize are identity
    /// operations. Words are lowercased; any plural/singular rule whose
    /// literal pattern or replacement equals the word is dropped.
    pub fn uncountable<I, S>(&mut self, words: I) -> InflectionResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().to_lowercase();
            self.plurals.remove_word(&word);
            self.singulars.remove_word(&word);
            self.uncountables.add(&word)?;
        }
        Ok(())
    }

    /// Register an acronym; `word` is its canonical casing during case
    /// transforms.
    pub fn acronym(&mut self, word: &str) -> InflectionResult<()> {
        self.acronyms.add(word)
    }

    /// Register a humanization rule.
    pub fn human(&mut self, pattern: Pattern, replacement: &str) {
        self.humans.prepend(Rule::new(pattern, replacement));
    }

    /// Reset the structures selected by `scope`. Acronyms are not part of
    /// any scope and always persist.
    pub fn clear(&mut self, scope: RuleScope) {
        match scope {
            RuleScope::All => {
                self.plurals.clear();
                self.singulars.clear();
                self.uncountables.clear();
                self.humans.clear();
            }
            RuleScope::Plurals => self.plurals.clear(),
            RuleScope::Singulars => self.singulars.clear(),
            RuleScope::Uncountables => self.uncountables.clear(),
            RuleScope::Humans => self.humans.clear(),
        }
    }

    pub fn plurals(&self) -> &RuleList {
        &self.plurals
    }

    pub fn singulars(&self) -> &RuleList {
        &self.singulars
    }

    pub fn humans(&self) -> &RuleList {
        &self.humans
    }

    pub fn uncountables(&self) -> &Uncountables {
        &self.uncountables
    }

    pub fn acronyms(&self) -> &Acronyms {
        &self.acronyms
    }
}
