//! Human-readable and title-cased display forms.

use once_cell::sync::Lazy;
use regex::Regex;

use super::cases::is_word;
use crate::locale::Inflections;

static WORD_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new("[A-Za-z0-9]+").expect("valid pattern"));

/// Options accepted by [`Inflections::humanize_with`].
#[derive(Debug, Clone, Copy)]
pub struct HumanizeOptions {
    /// Uppercase the first character of the result.
    pub capitalize: bool,
    /// Keep a trailing `_id`, rendered as its own word.
    pub keep_id_suffix: bool,
}

impl Default for HumanizeOptions {
    fn default() -> Self {
        Self {
            capitalize: true,
            keep_id_suffix: false,
        }
    }
}

fn capitalize_leading_word_char(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if is_word(first) => first.to_uppercase().chain(chars).collect(),
        _ => text.to_string(),
    }
}

impl Inflections {
    /// Human-readable form of a lower-cased, underscored word.
    ///
    /// ```ignore
    /// assert_eq!(rules.humanize("employee_salary"), "Employee salary");
    /// assert_eq!(rules.humanize("author_id"), "Author");
    /// ```
    pub fn humanize(&self, word: &str) -> String {
        self.humanize_with(word, HumanizeOptions::default())
    }

    /// `humanize` with explicit options.
    ///
    /// Human rules run first (first change wins, no uncountable check),
    /// then leading underscores are stripped, a trailing `_id` is stripped
    /// or set aside, underscores become spaces, every letter/digit run is
    /// re-cased (acronym hit wins, otherwise lowercase) and the first
    /// character is optionally capitalized. A kept id suffix is appended
    /// as its own word, using the registered acronym form of "id" when one
    /// exists.
    pub fn humanize_with(&self, word: &str, options: HumanizeOptions) -> String {
        let mut result = self
            .humans
            .rewrite(word)
            .unwrap_or_else(|| word.to_string());
        result = result.trim_start_matches('_').to_string();

        let mut id_suffix = None;
        if let Some(stem) = result.strip_suffix("_id") {
            if options.keep_id_suffix {
                id_suffix = Some(self.acronyms.canonical("id").unwrap_or("Id").to_string());
            }
            result = stem.to_string();
        }

        result = result.replace('_', " ");
        result = WORD_RUNS
            .replace_all(&result, |caps: &regex::Captures<'_>| {
                let run = caps[0].to_lowercase();
                match self.acronyms.canonical(&run) {
                    Some(canonical) => canonical.to_string(),
                    None => run,
                }
            })
            .into_owned();

        if options.capitalize {
            result = capitalize_leading_word_char(&result);
        }

        if let Some(suffix) = id_suffix {
            if result.is_empty() {
                result = suffix;
            } else {
                result.push(' ');
                result.push_str(&suffix);
            }
        }
        result
    }

    /// Title Case form of `word`: humanized, then every word-boundary
    /// letter capitalized. A letter following a word character plus an
    /// apostrophe (or backtick) is part of a contraction and stays
    /// lowercase.
    pub fn titleize(&self, word: &str) -> String {
        self.titleize_with(word, false)
    }

    pub fn titleize_with(&self, word: &str, keep_id_suffix: bool) -> String {
        let humanized = self.humanize_with(
            &self.underscore(word),
            HumanizeOptions {
                capitalize: true,
                keep_id_suffix,
            },
        );
        let chars: Vec<char> = humanized.chars().collect();
        let mut out = String::with_capacity(humanized.len());
        for (i, &c) in chars.iter().enumerate() {
            let boundary = i == 0 || !is_word(chars[i - 1]);
            let contraction = i >= 2
                && matches!(chars[i - 1], '\'' | '’' | '`')
                && is_word(chars[i - 2]);
            if c.is_ascii_lowercase() && boundary && !contraction {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }
}
