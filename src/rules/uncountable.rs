//! Uncountable-word set.

use regex::Regex;

use crate::error::InflectionResult;

/// Words for which pluralize/singularize are identity operations.
///
/// Membership is a case-insensitive whole-word suffix match, not exact
/// equality: "Fish" and "swedish fish" are both uncountable once "fish" is
/// registered, "catfish" is not (no word boundary before the entry).
#[derive(Debug, Clone, Default)]
pub struct Uncountables {
    words: Vec<String>,
    matchers: Vec<Regex>,
}

impl Uncountables {
    /// Add a word. Stored lowercase; duplicates are ignored.
    pub fn add(&mut self, word: &str) -> InflectionResult<()> {
        let word = word.to_lowercase();
        if self.words.contains(&word) {
            return Ok(());
        }
        let matcher = Regex::new(&format!(r"(?i)\b{}$", regex::escape(&word)))?;
        self.words.push(word);
        self.matchers.push(matcher);
        Ok(())
    }

    /// Remove a word and its matcher, if present.
    pub fn remove(&mut self, word: &str) {
        let word = word.to_lowercase();
        if let Some(index) = self.words.iter().position(|entry| *entry == word) {
            self.words.remove(index);
            self.matchers.remove(index);
        }
    }

    /// Whether `word` ends in a registered uncountable at a word boundary.
    pub fn is_uncountable(&self, word: &str) -> bool {
        self.matchers.iter().any(|matcher| matcher.is_match(word))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn clear(&mut self) {
        self.words.clear();
        self.matchers.clear();
    }
}
