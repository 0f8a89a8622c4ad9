//! Process-wide locale registry.
//!
//! [`Inflector`] owns one [`Inflections`] per locale, created lazily on
//! first access; the default locale is seeded with the built-in English
//! table. It is an explicit handle, not an ambient global: whatever owns
//! program startup constructs it, registers any custom rules, and passes
//! it (by reference) to everything that needs a transform.
//!
//! Concurrency follows a single-writer-at-startup, many-readers-at-runtime
//! discipline. Mutation happens behind the map's exclusive entry lock, so
//! a reader can never observe a rule set mid-mutation; read-only transform
//! calls from any number of threads need no coordination.

use dashmap::DashMap;

use super::{english, Inflections, RuleScope};
use crate::transform::HumanizeOptions;

/// Locale seeded with the built-in English rules on first access.
pub const DEFAULT_LOCALE: &str = "en";

/// Locale identifier to rule-set table.
///
/// Locale identifiers are opaque tokens; nothing validates them against a
/// locale catalog.
#[derive(Debug, Default)]
pub struct Inflector {
    locales: DashMap<String, Inflections>,
}

fn new_rule_set(locale: &str) -> Inflections {
    if locale == DEFAULT_LOCALE {
        english::seeded()
    } else {
        Inflections::new()
    }
}

impl Inflector {
    pub fn new() -> Self {
        Self {
            locales: DashMap::new(),
        }
    }

    /// Run `f` with exclusive access to the locale's rule set, creating
    /// (and for the default locale, seeding) it on first use.
    ///
    /// Registration belongs in the initialization phase:
    ///
    /// ```ignore
    /// let inflector = Inflector::new();
    /// inflector.configure("en", |rules| {
    ///     rules.irregular("octopus", "octopodes")?;
    ///     rules.acronym("GraphQL")
    /// })?;
    /// ```
    ///
    /// Do not call transforms for the same locale from inside `f`; the
    /// entry is exclusively locked for the duration of the closure.
    pub fn configure<T>(&self, locale: &str, f: impl FnOnce(&mut Inflections) -> T) -> T {
        let mut entry = self
            .locales
            .entry(locale.to_string())
            .or_insert_with(|| new_rule_set(locale));
        f(entry.value_mut())
    }

    /// Run `f` with shared access to the locale's rule set, creating it on
    /// first use. Every transform resolves its rule set through here.
    pub fn with_rules<T>(&self, locale: &str, f: impl FnOnce(&Inflections) -> T) -> T {
        if let Some(rules) = self.locales.get(locale) {
            return f(rules.value());
        }
        let rules = self
            .locales
            .entry(locale.to_string())
            .or_insert_with(|| new_rule_set(locale))
            .downgrade();
        f(rules.value())
    }

    /// Reset rule structures for `locale`.
    pub fn clear(&self, locale: &str, scope: RuleScope) {
        self.configure(locale, |rules| rules.clear(scope));
    }

    /// Plural form of `word` under the default locale.
    pub fn pluralize(&self, word: &str) -> String {
        self.pluralize_in(DEFAULT_LOCALE, word)
    }

    pub fn pluralize_in(&self, locale: &str, word: &str) -> String {
        self.with_rules(locale, |rules| rules.pluralize(word))
    }

    /// Singular form of `word` under the default locale.
    pub fn singularize(&self, word: &str) -> String {
        self.singularize_in(DEFAULT_LOCALE, word)
    }

    pub fn singularize_in(&self, locale: &str, word: &str) -> String {
        self.with_rules(locale, |rules| rules.singularize(word))
    }

    /// UpperCamelCase form of `term` under the default locale.
    pub fn camelize(&self, term: &str) -> String {
        self.camelize_in(DEFAULT_LOCALE, term)
    }

    pub fn camelize_in(&self, locale: &str, term: &str) -> String {
        self.with_rules(locale, |rules| rules.camelize(term))
    }

    /// lowerCamelCase form of `term` under the default locale.
    pub fn camelize_lower(&self, term: &str) -> String {
        self.camelize_lower_in(DEFAULT_LOCALE, term)
    }

    pub fn camelize_lower_in(&self, locale: &str, term: &str) -> String {
        self.with_rules(locale, |rules| rules.camelize_lower(term))
    }

    /// snake_case form of `word` under the default locale.
    pub fn underscore(&self, word: &str) -> String {
        self.underscore_in(DEFAULT_LOCALE, word)
    }

    pub fn underscore_in(&self, locale: &str, word: &str) -> String {
        self.with_rules(locale, |rules| rules.underscore(word))
    }

    /// Human-readable form of `word` under the default locale.
    pub fn humanize(&self, word: &str) -> String {
        self.humanize_in(DEFAULT_LOCALE, word)
    }

    pub fn humanize_in(&self, locale: &str, word: &str) -> String {
        self.with_rules(locale, |rules| rules.humanize(word))
    }

    pub fn humanize_with(&self, word: &str, options: HumanizeOptions) -> String {
        self.humanize_with_in(DEFAULT_LOCALE, word, options)
    }

    pub fn humanize_with_in(&self, locale: &str, word: &str, options: HumanizeOptions) -> String {
        self.with_rules(locale, |rules| rules.humanize_with(word, options))
    }

    /// Title Case form of `word` under the default locale.
    pub fn titleize(&self, word: &str) -> String {
        self.titleize_in(DEFAULT_LOCALE, word)
    }

    pub fn titleize_in(&self, locale: &str, word: &str) -> String {
        self.with_rules(locale, |rules| rules.titleize(word))
    }

    /// Table name for a class name, under the default locale.
    pub fn tableize(&self, class_name: &str) -> String {
        self.tableize_in(DEFAULT_LOCALE, class_name)
    }

    pub fn tableize_in(&self, locale: &str, class_name: &str) -> String {
        self.with_rules(locale, |rules| rules.tableize(class_name))
    }

    /// Class name for a table name, under the default locale.
    pub fn classify(&self, table_name: &str) -> String {
        self.classify_in(DEFAULT_LOCALE, table_name)
    }

    pub fn classify_in(&self, locale: &str, table_name: &str) -> String {
        self.with_rules(locale, |rules| rules.classify(table_name))
    }

    /// Foreign-key column name for a class name, under the default locale.
    pub fn foreign_key(&self, class_name: &str) -> String {
        self.foreign_key_in(DEFAULT_LOCALE, class_name)
    }

    pub fn foreign_key_in(&self, locale: &str, class_name: &str) -> String {
        self.with_rules(locale, |rules| rules.foreign_key(class_name))
    }
}
