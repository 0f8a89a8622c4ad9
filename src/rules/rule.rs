//! Pattern/replacement rules and their ordered lists.

use std::borrow::Cow;

use regex::Regex;

use crate::error::InflectionResult;

/// What a rule matches against: a compiled regular expression, or a literal
/// word compared for whole-word equality.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Matches only when the candidate word equals the literal exactly.
    Exact(String),
    /// Matches anywhere in the word; the first match is rewritten.
    Regex(Regex),
}

impl Pattern {
    /// Literal whole-word pattern.
    pub fn exact(word: impl Into<String>) -> Self {
        Pattern::Exact(word.into())
    }

    /// Compile `pattern` as a regular expression.
    pub fn regex(pattern: &str) -> InflectionResult<Self> {
        Ok(Pattern::Regex(Regex::new(pattern)?))
    }

    /// The literal word behind this pattern, if it is an exact match.
    pub fn as_exact(&self) -> Option<&str> {
        match self {
            Pattern::Exact(word) => Some(word),
            Pattern::Regex(_) => None,
        }
    }
}

/// One rewrite rule: a pattern plus a replacement template.
///
/// Replacement templates for regex patterns may reference capture groups
/// with `${n}`; unmatched groups expand to the empty string.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Pattern,
    replacement: String,
}

impl Rule {
    pub fn new(pattern: Pattern, replacement: impl Into<String>) -> Self {
        Self {
            pattern,
            replacement: replacement.into(),
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Apply the rule to `word`.
    ///
    /// Returns the rewritten word only when the pattern matched *and* the
    /// result differs from the input. A match that rewrites the word to
    /// itself counts as not applied, so lookup moves on to older rules.
    pub fn apply(&self, word: &str) -> Option<String> {
        match &self.pattern {
            Pattern::Exact(target) => {
                if word == target && self.replacement != *target {
                    Some(self.replacement.clone())
                } else {
                    None
                }
            }
            Pattern::Regex(pattern) => match pattern.replace(word, self.replacement.as_str()) {
                Cow::Owned(rewritten) if rewritten != word => Some(rewritten),
                _ => None,
            },
        }
    }
}

/// Ordered rule sequence with a prepend-on-insert contract.
///
/// Insertion always happens at the front, so iteration visits the most
/// recently registered rule first. Built-in rules are seeded before any
/// user rules, which is what lets user rules override defaults without
/// removing them.
#[derive(Debug, Clone, Default)]
pub struct RuleList {
    rules: Vec<Rule>,
}

impl RuleList {
    /// Insert `rule` at the front of the list.
    pub fn prepend(&mut self, rule: Rule) {
        self.rules.insert(0, rule);
    }

    /// Rewrite `word` with the first rule that changes it.
    pub fn rewrite(&self, word: &str) -> Option<String> {
        self.rules.iter().find_map(|rule| rule.apply(word))
    }

    /// Drop every rule whose exact pattern or replacement equals `word`.
    pub fn remove_word(&mut self, word: &str) {
        self.rules
            .retain(|rule| rule.pattern.as_exact() != Some(word) && rule.replacement != word);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn clear(&mut self) {
        self.rules.clear();
    }
}
