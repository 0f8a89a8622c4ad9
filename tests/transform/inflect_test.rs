//! Pluralize/singularize over the built-in English table.

use inflexion::{Inflections, Pattern};

#[test]
fn test_regular_plurals() {
    let rules = Inflections::english();
    assert_eq!(rules.pluralize("post"), "posts");
    assert_eq!(rules.pluralize("category"), "categories");
    assert_eq!(rules.pluralize("query"), "queries");
    assert_eq!(rules.pluralize("day"), "days");
    assert_eq!(rules.pluralize("church"), "churches");
    assert_eq!(rules.pluralize("box"), "boxes");
    assert_eq!(rules.pluralize("bus"), "buses");
    assert_eq!(rules.pluralize("quiz"), "quizzes");
    assert_eq!(rules.pluralize("tomato"), "tomatoes");
    assert_eq!(rules.pluralize("datum"), "data");
    assert_eq!(rules.pluralize("analysis"), "analyses");
    assert_eq!(rules.pluralize("wife"), "wives");
    assert_eq!(rules.pluralize("half"), "halves");
    assert_eq!(rules.pluralize("hive"), "hives");
    assert_eq!(rules.pluralize("matrix"), "matrices");
    assert_eq!(rules.pluralize("vertex"), "vertices");
    assert_eq!(rules.pluralize("mouse"), "mice");
    assert_eq!(rules.pluralize("ox"), "oxen");
    assert_eq!(rules.pluralize("virus"), "viri");
    assert_eq!(rules.pluralize("status"), "statuses");
    assert_eq!(rules.pluralize("axis"), "axes");
}

#[test]
fn test_plurals_ending_in_s_are_stable() {
    let rules = Inflections::english();
    assert_eq!(rules.pluralize("posts"), "posts");
    assert_eq!(rules.pluralize("cactus"), "cactus");
}

#[test]
fn test_irregular_plurals() {
    let rules = Inflections::english();
    assert_eq!(rules.pluralize("person"), "people");
    assert_eq!(rules.pluralize("Person"), "People");
    assert_eq!(rules.pluralize("man"), "men");
    assert_eq!(rules.pluralize("woman"), "women");
    assert_eq!(rules.pluralize("child"), "children");
    assert_eq!(rules.pluralize("zombie"), "zombies");
    assert_eq!(rules.pluralize("sex"), "sexes");
    assert_eq!(rules.pluralize("move"), "moves");
}

#[test]
fn test_regular_singulars() {
    let rules = Inflections::english();
    assert_eq!(rules.singularize("posts"), "post");
    assert_eq!(rules.singularize("categories"), "category");
    assert_eq!(rules.singularize("churches"), "church");
    assert_eq!(rules.singularize("analyses"), "analysis");
    assert_eq!(rules.singularize("prognoses"), "prognosis");
    assert_eq!(rules.singularize("wives"), "wife");
    assert_eq!(rules.singularize("wolves"), "wolf");
    assert_eq!(rules.singularize("objectives"), "objective");
    assert_eq!(rules.singularize("movies"), "movie");
    assert_eq!(rules.singularize("databases"), "database");
    assert_eq!(rules.singularize("matrices"), "matrix");
    assert_eq!(rules.singularize("vertices"), "vertex");
    assert_eq!(rules.singularize("quizzes"), "quiz");
    assert_eq!(rules.singularize("oxen"), "ox");
    assert_eq!(rules.singularize("mice"), "mouse");
    assert_eq!(rules.singularize("shoes"), "shoe");
    assert_eq!(rules.singularize("heroes"), "hero");
    assert_eq!(rules.singularize("menus"), "menu");
    assert_eq!(rules.singularize("octopi"), "octopus");
    assert_eq!(rules.singularize("statuses"), "status");
    assert_eq!(rules.singularize("crises"), "crisis");
    assert_eq!(rules.singularize("axes"), "axis");
}

#[test]
fn test_singulars_protected_by_their_suffix() {
    let rules = Inflections::english();
    assert_eq!(rules.singularize("address"), "address");
    assert_eq!(rules.singularize("class"), "class");
    assert_eq!(rules.singularize("virus"), "virus");
    assert_eq!(rules.singularize("status"), "status");
}

#[test]
fn test_irregular_singulars() {
    let rules = Inflections::english();
    assert_eq!(rules.singularize("people"), "person");
    assert_eq!(rules.singularize("People"), "Person");
    assert_eq!(rules.singularize("men"), "man");
    assert_eq!(rules.singularize("children"), "child");
    assert_eq!(rules.singularize("moves"), "move");
    assert_eq!(rules.singularize("sexes"), "sex");
    assert_eq!(rules.singularize("zombies"), "zombie");
}

#[test]
fn test_empty_word_is_unchanged() {
    let rules = Inflections::english();
    assert_eq!(rules.pluralize(""), "");
    assert_eq!(rules.singularize(""), "");
}

#[test]
fn test_word_with_no_matching_rule_is_unchanged() {
    let mut rules = Inflections::new();
    assert_eq!(rules.pluralize("datum"), "datum");
    rules
        .plural(Pattern::regex(r"(?i)([ti])um$").unwrap(), "${1}a");
    assert_eq!(rules.pluralize("datum"), "data");
}

#[test]
fn test_newest_rule_wins_over_builtin() {
    let mut rules = Inflections::english();
    assert_eq!(rules.pluralize("gizmo"), "gizmos");
    rules.plural(Pattern::regex(r"(?i)(gizmo)$").unwrap(), "${1}en");
    assert_eq!(rules.pluralize("gizmo"), "gizmoen");
}
