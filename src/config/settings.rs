//! TOML-based rule configuration.
//!
//! Example configuration:
//! ```toml
//! [locales.en]
//! acronyms = ["HTML", "GraphQL"]
//! uncountables = ["firmware"]
//!
//! [[locales.en.irregulars]]
//! singular = "octopus"
//! plural = "octopodes"
//!
//! [[locales.en.plurals]]
//! pattern = "(?i)(qube)$"
//! replacement = "${1}z"
//!
//! [[locales.en.humans]]
//! pattern = "col_rpted_bugs"
//! replacement = "Reported bugs"
//! exact = true
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{InflectionError, InflectionResult};
use crate::locale::{Inflections, Inflector};
use crate::rules::Pattern;

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid inflection rule for locale '{locale}': {source}")]
    InvalidRule {
        locale: String,
        source: InflectionError,
    },
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Rule declarations keyed by locale identifier.
    pub locales: HashMap<String, LocaleSettings>,
}

/// Rule declarations for one locale.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LocaleSettings {
    pub acronyms: Vec<String>,
    pub uncountables: Vec<String>,
    pub irregulars: Vec<IrregularSettings>,
    pub plurals: Vec<RuleSettings>,
    pub singulars: Vec<RuleSettings>,
    pub humans: Vec<RuleSettings>,
}

/// One irregular singular/plural pair.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IrregularSettings {
    pub singular: String,
    pub plural: String,
}

/// One pattern/replacement rule.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RuleSettings {
    /// Regular expression, or a literal word when `exact` is set.
    pub pattern: String,
    /// Replacement template; `${n}` references capture groups.
    pub replacement: String,
    /// Treat `pattern` as a whole-word literal instead of a regex.
    #[serde(default)]
    pub exact: bool,
}

impl RuleSettings {
    fn compiled(&self) -> InflectionResult<Pattern> {
        if self.exact {
            Ok(Pattern::exact(self.pattern.clone()))
        } else {
            Pattern::regex(&self.pattern)
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse settings from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(contents)?)
    }

    /// Register every declared rule on `inflector`.
    ///
    /// Within a locale, declarations are applied in order: list rules
    /// first (so later declarations win during lookup), then irregulars,
    /// uncountables and acronyms.
    pub fn apply(&self, inflector: &Inflector) -> Result<(), SettingsError> {
        for (locale, declared) in &self.locales {
            inflector
                .configure(locale, |rules| apply_locale(rules, declared))
                .map_err(|source| SettingsError::InvalidRule {
                    locale: locale.clone(),
                    source,
                })?;
        }
        Ok(())
    }
}

fn apply_locale(rules: &mut Inflections, declared: &LocaleSettings) -> InflectionResult<()> {
    for rule in &declared.plurals {
        rules.plural(rule.compiled()?, &rule.replacement);
    }
    for rule in &declared.singulars {
        rules.singular(rule.compiled()?, &rule.replacement);
    }
    for rule in &declared.humans {
        rules.human(rule.compiled()?, &rule.replacement);
    }
    for pair in &declared.irregulars {
        rules.irregular(&pair.singular, &pair.plural)?;
    }
    rules.uncountable(declared.uncountables.iter())?;
    for acronym in &declared.acronyms {
        rules.acronym(acronym)?;
    }
    Ok(())
}
