//! TOML rule configuration.

use inflexion::config::{Settings, SettingsError};
use inflexion::Inflector;

const SAMPLE: &str = r#"
[locales.en]
acronyms = ["GraphQL"]
uncountables = ["firmware"]

[[locales.en.irregulars]]
singular = "octopus"
plural = "octopodes"

[[locales.en.plurals]]
pattern = "(?i)(qube)$"
replacement = "${1}z"

[[locales.en.humans]]
pattern = "legacy_col"
replacement = "Legacy column"
exact = true
"#;

#[test]
fn test_parse_and_apply() {
    let settings = Settings::from_toml(SAMPLE).unwrap();
    let inflector = Inflector::new();
    settings.apply(&inflector).unwrap();

    assert_eq!(inflector.camelize("graphql"), "GraphQL");
    assert_eq!(inflector.pluralize("firmware"), "firmware");
    assert_eq!(inflector.pluralize("octopus"), "octopodes");
    assert_eq!(inflector.singularize("octopodes"), "octopus");
    assert_eq!(inflector.pluralize("qube"), "qubez");
    assert_eq!(inflector.humanize("legacy_col"), "Legacy column");
    // the built-in table is still in effect underneath
    assert_eq!(inflector.pluralize("post"), "posts");
}

#[test]
fn test_declarations_for_unseeded_locales() {
    let settings = Settings::from_toml(
        r#"
[locales.de]
uncountables = ["obst"]
"#,
    )
    .unwrap();
    let inflector = Inflector::new();
    settings.apply(&inflector).unwrap();
    assert_eq!(inflector.pluralize_in("de", "obst"), "obst");
    assert_eq!(inflector.pluralize_in("de", "haus"), "haus");
}

#[test]
fn test_empty_settings_are_a_no_op() {
    let settings = Settings::from_toml("").unwrap();
    assert!(settings.locales.is_empty());
    let inflector = Inflector::new();
    settings.apply(&inflector).unwrap();
}

#[test]
fn test_missing_file() {
    let error = Settings::from_file("definitely/not/here.toml").unwrap_err();
    assert!(matches!(error, SettingsError::FileNotFound(_)));
}

#[test]
fn test_bad_toml_fails_to_parse() {
    assert!(matches!(
        Settings::from_toml("locales = "),
        Err(SettingsError::ParseError(_))
    ));
}

#[test]
fn test_invalid_pattern_is_reported_with_its_locale() {
    let settings = Settings::from_toml(
        r#"
[locales.en]
[[locales.en.plurals]]
pattern = "("
replacement = "x"
"#,
    )
    .unwrap();
    let inflector = Inflector::new();
    let error = settings.apply(&inflector).unwrap_err();
    match error {
        SettingsError::InvalidRule { locale, .. } => assert_eq!(locale, "en"),
        other => panic!("unexpected error: {:?}", other),
    }
}
