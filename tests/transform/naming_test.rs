//! Table, class and foreign-key name derivation.

use inflexion::{deconstantize, demodulize, ordinal, ordinalize, Inflections};

#[test]
fn test_tableize() {
    let rules = Inflections::english();
    assert_eq!(rules.tableize("RawScaledScorer"), "raw_scaled_scorers");
    assert_eq!(rules.tableize("EggAndHam"), "egg_and_hams");
    assert_eq!(rules.tableize("fancyCategory"), "fancy_categories");
    assert_eq!(rules.tableize("Person"), "people");
}

#[test]
fn test_classify() {
    let rules = Inflections::english();
    assert_eq!(rules.classify("ham_and_eggs"), "HamAndEgg");
    assert_eq!(rules.classify("posts"), "Post");
    assert_eq!(rules.classify("people"), "Person");
    // a schema prefix is dropped up to the last dot
    assert_eq!(rules.classify("schema.posts"), "Post");
    assert_eq!(rules.classify("db.schema.posts"), "Post");
}

#[test]
fn test_foreign_key() {
    let rules = Inflections::english();
    assert_eq!(rules.foreign_key("Message"), "message_id");
    assert_eq!(rules.foreign_key("Admin::Post"), "post_id");
    assert_eq!(rules.foreign_key_with("Message", false), "messageid");
}

#[test]
fn test_demodulize() {
    assert_eq!(demodulize("CollectionProxy::Inner"), "Inner");
    assert_eq!(demodulize("Inner"), "Inner");
    assert_eq!(demodulize(""), "");
}

#[test]
fn test_deconstantize() {
    assert_eq!(deconstantize("Net::HTTP::Get"), "Net::HTTP");
    assert_eq!(deconstantize("::Get"), "");
    assert_eq!(deconstantize("Get"), "");
}

#[test]
fn test_ordinals() {
    assert_eq!(ordinal(1), "st");
    assert_eq!(ordinal(2), "nd");
    assert_eq!(ordinal(13), "th");
    assert_eq!(ordinalize(1), "1st");
    assert_eq!(ordinalize(2), "2nd");
    assert_eq!(ordinalize(1002), "1002nd");
    assert_eq!(ordinalize(1003), "1003rd");
    assert_eq!(ordinalize(-11), "-11th");
}

#[test]
fn test_model_naming_snapshot() {
    let rules = Inflections::english();
    let derived = ["Person", "Admin::LineItem", "RawScaledScorer"]
        .iter()
        .map(|class| {
            format!(
                "{} => table: {}, fk: {}",
                class,
                rules.tableize(class),
                rules.foreign_key(class)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(derived, @r###"
    Person => table: people, fk: person_id
    Admin::LineItem => table: admin/line_items, fk: line_item_id
    RawScaledScorer => table: raw_scaled_scorers, fk: raw_scaled_scorer_id
    "###);
}
