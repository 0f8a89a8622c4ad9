//! Database- and namespace-facing derived names.

use crate::locale::Inflections;

impl Inflections {
    /// Table name for a class name: underscored, namespaces kept as path
    /// segments, last word pluralized.
    ///
    /// ```ignore
    /// assert_eq!(rules.tableize("RawScaledScorer"), "raw_scaled_scorers");
    /// ```
    pub fn tableize(&self, class_name: &str) -> String {
        self.pluralize(&self.underscore(class_name))
    }

    /// Class name for a table name. A `schema.`-style prefix is dropped up
    /// to the last `.`; the result is singularized and camelized. Like its
    /// inverse `tableize`, this is lossy for irregular casings.
    pub fn classify(&self, table_name: &str) -> String {
        let base = table_name
            .rsplit_once('.')
            .map_or(table_name, |(_, tail)| tail);
        self.camelize(&self.singularize(base))
    }

    /// Foreign-key column name for a class name.
    pub fn foreign_key(&self, class_name: &str) -> String {
        self.foreign_key_with(class_name, true)
    }

    pub fn foreign_key_with(&self, class_name: &str, separate_with_underscore: bool) -> String {
        let key = self.underscore(demodulize(class_name));
        if separate_with_underscore {
            format!("{}_id", key)
        } else {
            format!("{}id", key)
        }
    }
}

/// Everything after the last `::`, or the path itself.
pub fn demodulize(path: &str) -> &str {
    path.rfind("::").map_or(path, |index| &path[index + 2..])
}

/// Everything before the last `::`, or the empty string.
pub fn deconstantize(path: &str) -> &str {
    path.rfind("::").map_or("", |index| &path[..index])
}
