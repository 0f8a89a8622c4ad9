//! Acronym table.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::InflectionResult;

/// `\b\B` can never be satisfied, so an empty table matches nothing.
static NEVER_MATCH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\B").expect("valid pattern"));

/// Lowercase acronym key to canonical display form, e.g. "html" -> "HTML".
///
/// The alternation regex over all canonical forms is rebuilt on every
/// insert; tokenizing transforms use it to find acronym occurrences inside
/// camel-cased words. Registration order is retained and decides which
/// acronym wins when several could match the same position.
#[derive(Debug, Clone)]
pub struct Acronyms {
    entries: HashMap<String, String>,
    order: Vec<String>,
    alternation: Regex,
}

impl Default for Acronyms {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            alternation: NEVER_MATCH.clone(),
        }
    }
}

impl Acronyms {
    /// Register `word` under its lowercased key. Re-registering a key keeps
    /// its position but swaps in the new canonical form.
    pub fn add(&mut self, word: &str) -> InflectionResult<()> {
        let key = word.to_lowercase();
        match self.entries.insert(key, word.to_string()) {
            Some(previous) => {
                if let Some(slot) = self.order.iter_mut().find(|entry| **entry == previous) {
                    *slot = word.to_string();
                }
            }
            None => self.order.push(word.to_string()),
        }
        self.rebuild()
    }

    fn rebuild(&mut self) -> InflectionResult<()> {
        self.alternation = if self.order.is_empty() {
            NEVER_MATCH.clone()
        } else {
            let alternatives: Vec<String> =
                self.order.iter().map(|word| regex::escape(word)).collect();
            Regex::new(&format!("(?:{})", alternatives.join("|")))?
        };
        Ok(())
    }

    /// Canonical form for an exact (lowercase) key.
    pub fn canonical(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Alternation regex over all canonical forms.
    pub fn alternation(&self) -> &Regex {
        &self.alternation
    }

    /// Canonical forms in registration order.
    pub fn in_order(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }
}
