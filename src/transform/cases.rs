//! Case transforms: camelize, underscore and friends.
//!
//! `camelize` and `underscore` are character-level scans rather than rule
//! lookups. They are approximate inverses only: an acronym or irregularly
//! cased input need not round-trip (`camelize(underscore("SSLError"))` is
//! `"SslError"` unless "SSL" is a registered acronym), and derived
//! transforms depend on exactly this behavior.

use crate::locale::Inflections;

const NAMESPACE_SEPARATOR: &str = "::";

pub(crate) fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Byte length of the leading run of lowercase letters and digits.
fn leading_lower_run(term: &str) -> usize {
    term.find(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .unwrap_or(term.len())
}

/// First character uppercased, the rest lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

impl Inflections {
    /// UpperCamelCase form of `term`; `/` becomes the `::` namespace
    /// separator and registered acronyms keep their canonical casing.
    pub fn camelize(&self, term: &str) -> String {
        self.camelize_with(term, true)
    }

    /// lowerCamelCase form of `term`.
    pub fn camelize_lower(&self, term: &str) -> String {
        self.camelize_with(term, false)
    }

    pub fn camelize_with(&self, term: &str, uppercase_first_letter: bool) -> String {
        let mut out = String::with_capacity(term.len() + 8);
        let rest = if uppercase_first_letter {
            let head = &term[..leading_lower_run(term)];
            match self.acronyms.canonical(head) {
                Some(canonical) => out.push_str(canonical),
                None => out.push_str(&capitalize(head)),
            }
            &term[head.len()..]
        } else if let Some(prefix) = self.leading_acronym(term) {
            out.push_str(&prefix.to_lowercase());
            &term[prefix.len()..]
        } else {
            let mut chars = term.chars();
            match chars.next() {
                Some(first) if is_word(first) => {
                    out.extend(first.to_lowercase());
                    chars.as_str()
                }
                Some(first) => {
                    out.push(first);
                    chars.as_str()
                }
                None => "",
            }
        };

        // Each underscore or slash introduces a chunk that is re-cased:
        // a (lowercase) acronym key wins, anything else is capitalized.
        // Underscores are dropped, slashes become namespace separators.
        let mut chars = rest.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '_' || c == '/' {
                if c == '/' {
                    out.push('/');
                }
                let mut chunk = String::new();
                while let Some(&next) = chars.peek() {
                    if next.is_ascii_alphanumeric() {
                        chunk.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                match self.acronyms.canonical(&chunk) {
                    Some(canonical) => out.push_str(canonical),
                    None => out.push_str(&capitalize(&chunk)),
                }
            } else {
                out.push(c);
            }
        }
        out.replace('/', NAMESPACE_SEPARATOR)
    }

    /// A canonical acronym the term starts with, provided the acronym ends
    /// at a word boundary, an uppercase letter or an underscore.
    fn leading_acronym(&self, term: &str) -> Option<&str> {
        for canonical in self.acronyms.in_order() {
            if let Some(rest) = term.strip_prefix(canonical) {
                match rest.chars().next() {
                    None => return Some(canonical),
                    Some(next) if next == '_' || next.is_ascii_uppercase() || !is_word(next) => {
                        return Some(canonical)
                    }
                    Some(_) => {}
                }
            }
        }
        None
    }

    /// snake_case form of a camel-cased word; `::` becomes `/`.
    pub fn underscore(&self, camel_cased_word: &str) -> String {
        if !camel_cased_word.contains(NAMESPACE_SEPARATOR)
            && !camel_cased_word
                .chars()
                .any(|c| c.is_ascii_uppercase() || c == '-')
        {
            return camel_cased_word.to_string();
        }

        let word = camel_cased_word.replace(NAMESPACE_SEPARATOR, "/");
        let word = self.mark_acronyms(&word);

        let mut out = String::with_capacity(word.len() + 8);
        let chars: Vec<char> = word.chars().collect();
        for (i, &c) in chars.iter().enumerate() {
            if i > 0 && c.is_ascii_uppercase() {
                let prev = chars[i - 1];
                let after_lower = prev.is_ascii_lowercase() || prev.is_ascii_digit();
                let run_before_word = prev.is_ascii_uppercase()
                    && chars.get(i + 1).map_or(false, |n| n.is_ascii_lowercase());
                if after_lower || run_before_word {
                    out.push('_');
                }
            }
            out.push(c);
        }
        out.replace('-', "_").to_lowercase()
    }

    /// Lowercase every registered acronym occurrence, inserting an
    /// underscore when the acronym directly follows a letter or digit.
    /// Occurrences followed by a lowercase letter are part of a longer
    /// word and stay untouched.
    fn mark_acronyms(&self, word: &str) -> String {
        let mut out = String::with_capacity(word.len() + 4);
        let mut last = 0;
        for m in self.acronyms.alternation().find_iter(word) {
            let prev = word[..m.start()].chars().next_back();
            let next = word[m.end()..].chars().next();
            let after_alnum = prev.map_or(false, |c| c.is_ascii_alphanumeric());
            let at_boundary = prev.map_or(true, |c| !is_word(c));
            if !(after_alnum || at_boundary) {
                continue;
            }
            if next.map_or(false, |c| c.is_ascii_lowercase()) {
                continue;
            }
            out.push_str(&word[last..m.start()]);
            if after_alnum {
                out.push('_');
            }
            out.push_str(&m.as_str().to_lowercase());
            last = m.end();
        }
        out.push_str(&word[last..]);
        out
    }
}

/// Underscores become dashes.
pub fn dasherize(underscored_word: &str) -> String {
    underscored_word.replace('_', "-")
}

/// First character uppercased, everything else untouched.
pub fn upcase_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
