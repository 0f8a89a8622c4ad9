//! Pluralization and singularization.

use crate::locale::Inflections;
use crate::rules::{RuleList, Uncountables};

/// Core rule application: empty and uncountable words pass through, then
/// the first rule that changes the word wins. Lists prepend on insert, so
/// "first" means most recently registered.
fn apply_inflections(word: &str, rules: &RuleList, uncountables: &Uncountables) -> String {
    if word.is_empty() || uncountables.is_uncountable(word) {
        return word.to_string();
    }
    rules.rewrite(word).unwrap_or_else(|| word.to_string())
}

impl Inflections {
    /// Plural form of `word`.
    ///
    /// ```ignore
    /// assert_eq!(rules.pluralize("post"), "posts");
    /// assert_eq!(rules.pluralize("category"), "categories");
    /// assert_eq!(rules.pluralize("person"), "people");
    /// assert_eq!(rules.pluralize("sheep"), "sheep");
    /// ```
    pub fn pluralize(&self, word: &str) -> String {
        apply_inflections(word, &self.plurals, &self.uncountables)
    }

    /// Singular form of `word`.
    ///
    /// ```ignore
    /// assert_eq!(rules.singularize("posts"), "post");
    /// assert_eq!(rules.singularize("people"), "person");
    /// ```
    pub fn singularize(&self, word: &str) -> String {
        apply_inflections(word, &self.singulars, &self.uncountables)
    }
}
