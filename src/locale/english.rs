//! Built-in English rule table.
//!
//! Declaration order matters: every registration prepends, so lookup tries
//! rules bottom-up — irregulars first, then the suffix rules from the most
//! specific down to the catch-all at the top of this list. Rules that could
//! never rewrite a word are not declared, because lookup treats a no-op
//! match as "did not apply"; the catch-all patterns exclude the suffixes
//! (`s`, `us`, `ss`) that such identity guards used to protect.

use once_cell::sync::Lazy;

use super::Inflections;
use crate::error::InflectionResult;
use crate::rules::Pattern;

static ENGLISH: Lazy<Inflections> = Lazy::new(|| {
    let mut rules = Inflections::new();
    seed(&mut rules).expect("built-in English rules compile");
    rules
});

/// Clone of the shared seeded table. Regex handles are reference-counted,
/// so this is cheap.
pub(crate) fn seeded() -> Inflections {
    ENGLISH.clone()
}

fn plural(rules: &mut Inflections, pattern: &str, replacement: &str) -> InflectionResult<()> {
    rules.plural(Pattern::regex(pattern)?, replacement);
    Ok(())
}

fn singular(rules: &mut Inflections, pattern: &str, replacement: &str) -> InflectionResult<()> {
    rules.singular(Pattern::regex(pattern)?, replacement);
    Ok(())
}

fn seed(rules: &mut Inflections) -> InflectionResult<()> {
    plural(rules, r"(?i)([^s])$", "${1}s")?;
    plural(rules, r"(?i)^(ax|test)is$", "${1}es")?;
    plural(rules, r"(?i)(octop|vir)us$", "${1}i")?;
    plural(rules, r"(?i)(alias|status)$", "${1}es")?;
    plural(rules, r"(?i)(bu)s$", "${1}ses")?;
    plural(rules, r"(?i)(buffal|tomat)o$", "${1}oes")?;
    plural(rules, r"(?i)([ti])um$", "${1}a")?;
    plural(rules, r"(?i)sis$", "ses")?;
    plural(rules, r"(?i)(?:([^f])fe|([lr])f)$", "${1}${2}ves")?;
    plural(rules, r"(?i)(hive)$", "${1}s")?;
    plural(rules, r"(?i)([^aeiouy]|qu)y$", "${1}ies")?;
    plural(rules, r"(?i)(x|ch|ss|sh)$", "${1}es")?;
    plural(rules, r"(?i)(matr|vert|ind)(?:ix|ex)$", "${1}ices")?;
    plural(rules, r"(?i)^(m|l)ouse$", "${1}ice")?;
    plural(rules, r"(?i)^(ox)$", "${1}en")?;
    plural(rules, r"(?i)(quiz)$", "${1}zes")?;

    singular(rules, r"(?i)([^su])s$", "${1}")?;
    singular(rules, r"(?i)(menu)s$", "${1}")?;
    singular(rules, r"(?i)([ti])a$", "${1}um")?;
    singular(
        rules,
        r"(?i)((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)(sis|ses)$",
        "${1}sis",
    )?;
    singular(rules, r"(?i)([^f])ves$", "${1}fe")?;
    singular(rules, r"(?i)(hive)s$", "${1}")?;
    singular(rules, r"(?i)(tive)s$", "${1}")?;
    singular(rules, r"(?i)([lr])ves$", "${1}f")?;
    singular(rules, r"(?i)([^aeiouy]|qu)ies$", "${1}y")?;
    singular(rules, r"(?i)(m)ovies$", "${1}ovie")?;
    singular(rules, r"(?i)(x|ch|ss|sh)es$", "${1}")?;
    singular(rules, r"(?i)^(m|l)ice$", "${1}ouse")?;
    singular(rules, r"(?i)(bus)(es)?$", "${1}")?;
    singular(rules, r"(?i)(o)es$", "${1}")?;
    singular(rules, r"(?i)(shoe)s$", "${1}")?;
    singular(rules, r"(?i)(cris|test)(is|es)$", "${1}is")?;
    singular(rules, r"(?i)^(a)x[ie]s$", "${1}xis")?;
    singular(rules, r"(?i)(octop|vir)(us|i)$", "${1}us")?;
    singular(rules, r"(?i)(alias|status)(es)?$", "${1}")?;
    singular(rules, r"(?i)^(ox)en", "${1}")?;
    singular(rules, r"(?i)(vert|ind)ices$", "${1}ex")?;
    singular(rules, r"(?i)(matr)ices$", "${1}ix")?;
    singular(rules, r"(?i)(quiz)zes$", "${1}")?;
    singular(rules, r"(?i)(database)s$", "${1}")?;

    rules.irregular("person", "people")?;
    rules.irregular("man", "men")?;
    rules.irregular("child", "children")?;
    rules.irregular("sex", "sexes")?;
    rules.irregular("move", "moves")?;
    rules.irregular("zombie", "zombies")?;

    rules.uncountable([
        "equipment",
        "information",
        "rice",
        "money",
        "news",
        "series",
        "species",
        "fish",
        "sheep",
        "jeans",
        "police",
    ])?;

    Ok(())
}
