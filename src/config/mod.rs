//! Configuration module.
//!
//! Applications that need custom inflection rules declare them in a TOML
//! file and apply it to their registry during startup.

mod settings;

pub use settings::{IrregularSettings, LocaleSettings, RuleSettings, Settings, SettingsError};
