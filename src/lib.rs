//! # Inflexion
//!
//! Locale-aware string inflection: plural and singular forms, camel/snake
//! case conversion, human-readable names, and the table/class/foreign-key
//! names derived from them.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                 Inflector (locale registry)              │
//! │        one lazily-created rule set per locale            │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [resolve locale]
//! ┌─────────────────────────────────────────────────────────┐
//! │                Inflections (one locale)                  │
//! │   plural / singular / human rule lists (newest first)    │
//! │   + uncountable words + acronym table                    │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [read-only]
//! ┌─────────────────────────────────────────────────────────┐
//! │                      Transforms                          │
//! │  pluralize · singularize · camelize · underscore ·       │
//! │  humanize · titleize · tableize · classify · foreign_key │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The registry is an explicit value: construct an [`Inflector`], register
//! custom rules during startup (directly or from a TOML file via
//! [`config::Settings`]), then share it freely — transforms never mutate
//! the rule sets they read.

pub mod config;
pub mod error;
pub mod locale;
pub mod rules;
pub mod transform;

pub use error::{InflectionError, InflectionResult};
pub use locale::{Inflections, Inflector, RuleScope, DEFAULT_LOCALE};
pub use rules::{Pattern, Rule, RuleList};
pub use transform::{
    dasherize, deconstantize, demodulize, ordinal, ordinalize, upcase_first, HumanizeOptions,
};

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::config::Settings;
    pub use crate::error::{InflectionError, InflectionResult};
    pub use crate::locale::{Inflections, Inflector, RuleScope, DEFAULT_LOCALE};
    pub use crate::rules::{Pattern, Rule};
    pub use crate::transform::{
        dasherize, deconstantize, demodulize, ordinal, ordinalize, upcase_first, HumanizeOptions,
    };
}
