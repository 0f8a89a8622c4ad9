//! Integration tests for uncountable words.

use inflexion::{Inflections, Pattern};

#[test]
fn test_membership_is_a_case_insensitive_suffix_match() {
    let mut rules = Inflections::new();
    rules.uncountable(["fish"]).unwrap();
    assert!(rules.uncountables().is_uncountable("fish"));
    assert!(rules.uncountables().is_uncountable("Fish"));
    assert!(rules.uncountables().is_uncountable("swedish fish"));
    assert!(!rules.uncountables().is_uncountable("catfish"));
    assert!(!rules.uncountables().is_uncountable("fisherman"));
}

#[test]
fn test_uncountable_words_pass_through_inflection() {
    let rules = Inflections::english();
    assert_eq!(rules.pluralize("equipment"), "equipment");
    assert_eq!(rules.singularize("equipment"), "equipment");
    assert_eq!(rules.pluralize("Sheep"), "Sheep");
    assert_eq!(rules.singularize("news"), "news");
}

#[test]
fn test_registering_uncountable_drops_literal_rules() {
    let mut rules = Inflections::new();
    rules.plural(Pattern::exact("firmware"), "firmwares");
    assert_eq!(rules.pluralize("firmware"), "firmwares");
    rules.uncountable(["firmware"]).unwrap();
    assert_eq!(rules.pluralize("firmware"), "firmware");
    assert!(rules.plurals().is_empty());
}

#[test]
fn test_registering_a_rule_removes_the_uncountable_entry() {
    let mut rules = Inflections::new();
    rules.uncountable(["legacy"]).unwrap();
    rules.plural(Pattern::exact("legacy"), "legacies");
    assert!(!rules.uncountables().is_uncountable("legacy"));
    assert_eq!(rules.pluralize("legacy"), "legacies");
}
